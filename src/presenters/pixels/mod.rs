pub mod adapter;
pub mod presenter;

pub use adapter::StatusAdapter;
pub use presenter::PixelsPresenter;
