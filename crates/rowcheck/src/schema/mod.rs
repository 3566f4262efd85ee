//! Column layout expected by the validator.

mod fields;

pub use fields::{
    check_required_columns, AGE, EXPLANATION, FULL_NAME, HEALTH_PLAN, IDENTITY_NUMBER, IS_VALID,
    REQUIRED_FIELDS, SEX,
};
