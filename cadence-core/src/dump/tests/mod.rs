mod naming_tests;
