pub mod landing;
pub mod sections;
