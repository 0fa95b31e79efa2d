pub mod casefold;
