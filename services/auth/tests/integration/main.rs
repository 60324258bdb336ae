mod helpers;
mod role_test;
