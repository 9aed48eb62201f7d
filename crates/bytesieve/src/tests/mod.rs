mod indexing;
mod iteration;
