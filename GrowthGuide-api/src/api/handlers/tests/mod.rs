mod growth_handlers_test;
