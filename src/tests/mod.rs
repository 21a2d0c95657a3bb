mod formatter_tests;
mod sequence_tests;
mod sizes_tests;
mod utils;
