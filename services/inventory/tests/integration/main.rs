mod helpers;
mod store_test;
