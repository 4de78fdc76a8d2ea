mod profile;
mod transactions;
mod users;
