mod group;
mod schedule;
mod student;
mod user;
