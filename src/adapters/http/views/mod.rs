pub mod how_it_works;
pub mod page;
