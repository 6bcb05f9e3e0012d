mod ambient;
mod fixtures;
