mod translator_tests;
