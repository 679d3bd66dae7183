mod deviation_tests;
