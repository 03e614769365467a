mod subscriber_set;
