/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HelmCommonError>;

#[derive(Error,Debug)]
pub enum HelmCommonError {
    #[error("non-finite angle {0}")]
    NonFiniteAngle(f64),

    #[error("invalid coordinate {0}")]
    InvalidCoordinate(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),
}

#[macro_export]
macro_rules! invalid_coordinate {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::HelmCommonError::InvalidCoordinate( format!( $fmt $(, $arg)* ))
    };
}
