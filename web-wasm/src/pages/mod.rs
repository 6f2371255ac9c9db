pub mod about;
pub mod documentation;
pub mod home;
pub mod profile;
pub mod results;
pub mod scan;
pub mod team;
