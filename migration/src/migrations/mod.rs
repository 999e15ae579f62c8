pub mod m202601100001_create_users;
pub mod m202601100002_create_bootcamps;
pub mod m202601100003_create_courses;
