mod relay_verdict;
