use std::fmt;

use itertools::Itertools;
use log::*;

use crate::colormap::Colormap;

pub mod preset;

/// Module path assumed when the specifier carries no `:`.
pub const DEFAULT_MODULE: &str = "colorgrad.preset";

/// Module paths the registry knows about.
pub const MODULES: &[&str] = &["colorgrad", "colorgrad.preset"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    UnknownModule(String),
    UnknownAttribute { path: String, segment: String },
    NotAColormap(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolveError::UnknownModule(module) => write!(
                f,
                "no module `{}` in the colormap registry (known modules: {})",
                module,
                MODULES.iter().join(", ")
            ),
            ResolveError::UnknownAttribute { path, segment } => {
                write!(f, "`{}` not found while resolving `{}`", segment, path)
            }
            ResolveError::NotAColormap(path) => {
                write!(f, "`{}` names a namespace, not a colormap", path)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Clone, Copy)]
enum Namespace {
    Colorgrad,
    Preset,
}

enum Node {
    Namespace(Namespace),
    Map {
        gradient: Box<dyn colorgrad::Gradient>,
        reversed: bool,
    },
}

fn module_root(path: &str) -> Option<Namespace> {
    match path {
        "colorgrad" => Some(Namespace::Colorgrad),
        "colorgrad.preset" => Some(Namespace::Preset),
        _ => None,
    }
}

fn child(ns: Namespace, segment: &str) -> Option<Node> {
    match ns {
        Namespace::Colorgrad => match segment {
            "preset" => Some(Node::Namespace(Namespace::Preset)),
            _ => None,
        },
        Namespace::Preset => preset_child(segment),
    }
}

// A trailing `_r` selects the reversed variant of the base map.
fn preset_child(name: &str) -> Option<Node> {
    if let Some(gradient) = preset::gradient(name) {
        return Some(Node::Map {
            gradient,
            reversed: false,
        });
    }
    name.strip_suffix("_r")
        .and_then(preset::gradient)
        .map(|gradient| Node::Map {
            gradient,
            reversed: true,
        })
}

/// Split a specifier on its first `:` into module path and attribute path.
/// A bare specifier resolves in [`DEFAULT_MODULE`].
pub fn split_spec(spec: &str) -> (&str, &str) {
    match spec.find(':') {
        Some(i) => (&spec[..i], &spec[i + 1..]),
        None => (DEFAULT_MODULE, spec),
    }
}

/// Look up the dotted attribute path `attr` inside `module`, segment by
/// segment from the module root.
pub fn resolve(module: &str, attr: &str) -> Result<Colormap, ResolveError> {
    debug!("Resolving {}:{}", module, attr);
    let mut ns =
        module_root(module).ok_or_else(|| ResolveError::UnknownModule(module.to_string()))?;
    let mut segments = attr.split('.');
    while let Some(segment) = segments.next() {
        match child(ns, segment) {
            Some(Node::Namespace(next)) => ns = next,
            Some(Node::Map { gradient, reversed }) => {
                return match segments.next() {
                    Some(extra) => Err(ResolveError::UnknownAttribute {
                        path: attr.to_string(),
                        segment: extra.to_string(),
                    }),
                    None => Ok(Colormap::new(segment, gradient, reversed)),
                };
            }
            None => {
                return Err(ResolveError::UnknownAttribute {
                    path: attr.to_string(),
                    segment: segment.to_string(),
                })
            }
        }
    }
    Err(ResolveError::NotAColormap(attr.to_string()))
}

/// [`split_spec`] and [`resolve`] in one step.
pub fn resolve_spec(spec: &str) -> Result<Colormap, ResolveError> {
    let (module, attr) = split_spec(spec);
    resolve(module, attr)
}
