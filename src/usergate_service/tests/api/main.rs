mod create_user;
mod helpers;
mod profile;
mod session;
