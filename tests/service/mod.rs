mod artifact;
mod course;
mod progression;
mod task;
mod team;
mod tool;
