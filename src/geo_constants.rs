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

/// geodetic constants that have to be consistent across all modules of this crate.
/// The earth model used here is a sphere of mean radius. Every function that maps between
/// geodetic and cartesian space, or measures distances on or above the surface, has to use
/// the same radius or positions and distances stop being comparable

/// mean earth radius in kilometers
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;
