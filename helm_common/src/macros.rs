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

/* #region define_cli ***********************************************************************************/

/// syntactic sugar macro to define a static clap command line parser:
/// ```
/// # use helm_common::define_cli;
/// define_cli! { ARGS [about="show sampled path positions"] =
///     verbose: bool [short, long],
///     path: String [help="path to curved path JSON file"]
/// }
/// ```
/// expands into a `#[derive(clap::Parser)]` struct `CliOpts` and a lazy_static `ARGS` instance that
/// is parsed from the process arguments on first use
#[macro_export]
macro_rules! define_cli {
    ($name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )? $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        use clap::Parser;
        use lazy_static::lazy_static;

        #[derive(Parser,Debug)]
        #[command( $( $sopt $(=$sx)? ),* )]
        struct CliOpts {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])?
                $fname : $ftype,
            )*
        }
        lazy_static! { static ref $name: CliOpts = CliOpts::parse(); }
    }
}

/* #endregion define_cli */

/// syntactic sugar macro to expand into a struct with serde attribute macros
/// This mostly expands optional "[ attr,.. ]" groups into respective #[serde(attrs...)] container or field attribute macros
/// use like this:
///
/// define_serde_struct! {
///     pub PathConfig : Debug,Clone [deny_unknown_fields] =
///        time_step: f64 [default="default_time_step"],
///        label: Option<String>
/// }
#[macro_export]
macro_rules! define_serde_struct {
    ( $( #[$smeta:meta] )* $vis:vis $name:ident $( : $( $dt:path),* )? $( [ $( $sopt:ident $(= $sx:literal)? ),* ] )? =
       $( $( #[$fmeta:meta] )? $fvis:vis $fname:ident: $ftype:ty $( [ $( $fopt:ident $(= $fx:literal)? ),* ] )? ),*  $(,)?) => {
        $( #[$smeta] )*
        #[derive(serde::Serialize,serde::Deserialize $( $( , $dt)* )? )]
        $( #[serde( $( $sopt $( = $sx)? ),* ) ])?
        $vis struct $name {
            $(
                $( #[ $fmeta ] )?
                $( #[serde(  $( $fopt $( =$fx )?),*  )] )?
                $fvis $fname : $ftype
            ),*
        }
    }
}
