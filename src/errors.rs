/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

pub type Result<T> = std::result::Result<T, OdinSatpassError>;

#[derive(Error,Debug)]
pub enum OdinSatpassError {

    /// structurally broken TLE input (wrong line length, bad checksum, line mismatch). Fatal
    /// for the element set in question, nothing derived from it can be trusted
    #[error("TLE error {0}")]
    TleError( String ),

    /// the propagator could not produce a state for a requested instant (orbit decayed,
    /// eccentricity out of range). Recoverable, other instants of the same satellite can still work
    #[error("propagation error {0}")]
    PropagationError( String ),

    /// caller provided arguments outside their domain (latitude range, step size, scan window)
    #[error("invalid input {0}")]
    InvalidInput( String ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("cancelled {0}")]
    CancelledError( String ),

    #[error("operation failed {0}")]
    OpFailedError( String ),
}

macro_rules! tle_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinSatpassError::TleError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use tle_error;

macro_rules! prop_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinSatpassError::PropagationError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use prop_error;

macro_rules! invalid_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinSatpassError::InvalidInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_input;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinSatpassError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
