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
use helm_common::errors::HelmCommonError;

pub type Result<T> = std::result::Result<T, HelmPathError>;

#[derive(Error,Debug)]
pub enum HelmPathError {
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// not fatal - callers mostly treat this as "no position at this time"
    #[error("time {t} exceeds duration [{begin}..{end}]")]
    TimeOutOfRange { t: f64, begin: f64, end: f64 },

    #[error("empty path")]
    EmptyPath,

    #[error("common error {0}")]
    Common( #[from] HelmCommonError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),
}

impl HelmPathError {
    pub fn is_out_of_range (&self)->bool {
        matches!( self, HelmPathError::TimeOutOfRange{..})
    }
}

macro_rules! invalid_segment {
    ($fmt:literal $(, $arg:expr )* ) => {
        HelmPathError::InvalidSegment( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_segment;
