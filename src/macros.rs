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

/* #region define_cli  ***************************************************************************/

/// syntactic sugar macro for clap derive based command line interface definition
/// ```text
/// define_cli! { ARGS [about="my silly prog"] =
///     verbose: bool        [help="run verbose", short],
///     config: String       [help="pathname of config", long, default_value="blah"],
///     input: String        [help="input file"]
/// }
///
/// fn main () {
///    check_cli!(ARGS); // makes sure we exit on -h or --help before executing anything
///    ...
///    let config = &ARGS.config;
///    ...
/// }
/// ```
/// expands into a clap `Parser` struct plus a lazily parsed static `ARGS` instance of it
#[macro_export]
macro_rules! define_cli {
    ($name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )? $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        use clap::Parser;

        #[derive(Parser)]
        #[command( $( $sopt $(=$sx)? ),* )]
        struct CliOpts {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])?
                $fname : $ftype,
            )*
        }
        static $name: std::sync::LazyLock<CliOpts> = std::sync::LazyLock::new( CliOpts::parse);
    }
}

#[macro_export]
macro_rules! check_cli {
    ($args:ident) => { { std::sync::LazyLock::force( &$args); } }
}

/* #endregion define_cli */
