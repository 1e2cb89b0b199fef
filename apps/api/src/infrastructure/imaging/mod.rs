pub mod alpha;
pub mod compositor;
