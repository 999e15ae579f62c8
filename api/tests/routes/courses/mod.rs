mod delete_test;
