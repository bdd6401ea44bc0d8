pub mod abstract_section;
pub mod citation;
pub mod footer;
pub mod hero;
pub mod lazy_image;
pub mod lightbox;
pub mod methodology;
pub mod navigation;
pub mod results_gallery;
