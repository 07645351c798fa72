pub use self::intersection_test::{intersection_test, minimum_translation_vector};
pub use self::intersection_test_compound_shape::{
    mtv_compound_shape_compound_shape, mtv_compound_shape_shape, mtv_shape_compound_shape,
};

mod intersection_test;
mod intersection_test_compound_shape;
