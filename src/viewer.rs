pub mod controls;
pub mod geometry;
pub mod gltf;
pub mod material;
pub mod normalize;
pub mod pipeline;
pub mod scene;
