mod attendance;
mod group;
mod schedule;
mod student;
