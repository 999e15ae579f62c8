mod courses;
mod health_test;
