mod comment;
mod notification;
mod post;
mod story;
mod user;
