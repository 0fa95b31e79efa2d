mod lower_tests;
