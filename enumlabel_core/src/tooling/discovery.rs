//! Declaration discovery for a single package directory.
//!
//! Only the `.rs` files directly inside the directory are read. Two kinds of
//! declarations are recognized: unit-only enums, and associated integer
//! constants declared in `impl T` blocks (the newtype pattern).

use crate::error::{EnumlabelError, Result};
use crate::types::EnumType;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use syn::{Expr, ImplItem, Item, ItemEnum, ItemImpl, Lit, Type, UnOp, parse_file};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
enum Declaration {
    Enum {
        variants: Vec<String>,
        data_variant: Option<String>,
    },
    Newtype,
}

#[derive(Debug, Clone)]
struct AssocConst {
    name: String,
    value: Option<i128>,
}

/// The parsed declarations of one package directory.
#[derive(Debug, Clone)]
pub struct Package {
    dir: PathBuf,
    name: String,
    files: Vec<PathBuf>,
    declarations: BTreeMap<String, Declaration>,
    constants: BTreeMap<String, Vec<AssocConst>>,
}

impl Package {
    /// Parses every `.rs` file directly inside `dir`, in file name order.
    pub fn parse(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Parsing package directory {:?}", dir);

        if !dir.is_dir() {
            return Err(EnumlabelError::invalid_package(dir, "not a directory"));
        }
        let canonical = fs::canonicalize(dir)
            .map_err(|e| EnumlabelError::invalid_package(dir, e.to_string()))?;
        let name = package_name(&canonical)
            .ok_or_else(|| EnumlabelError::invalid_package(dir, "directory has no name"))?;

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .map_err(|e| EnumlabelError::invalid_package(dir, e.to_string()))?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path.to_path_buf());
            }
        }
        if files.is_empty() {
            return Err(EnumlabelError::invalid_package(dir, "no .rs files found"));
        }

        let mut package = Package {
            dir: dir.to_path_buf(),
            name,
            files: Vec::with_capacity(files.len()),
            declarations: BTreeMap::new(),
            constants: BTreeMap::new(),
        };

        for file in files {
            trace!("Parsing file: {:?}", file);
            let content = fs::read_to_string(&file)?;
            let syntax = parse_file(&content).map_err(|e| {
                warn!("Error parsing file {:?}: {}", file, e);
                EnumlabelError::invalid_package(&file, e.to_string())
            })?;
            for item in &syntax.items {
                package.visit_item(item);
            }
            package.files.push(file);
        }

        debug!(
            package = %package.name,
            file_count = package.files.len(),
            type_count = package.declarations.len(),
            "Package parsed"
        );
        Ok(package)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Declared names of the constants of `type_name`, in declaration order.
    ///
    /// For newtypes, constants repeating an earlier value are skipped.
    pub fn values_of_type(&self, type_name: &str) -> Result<Vec<String>> {
        match self.declarations.get(type_name) {
            Some(Declaration::Enum {
                data_variant: Some(variant),
                ..
            }) => Err(EnumlabelError::no_constants(
                type_name,
                format!("variant {variant} carries data"),
            )),
            Some(Declaration::Enum { variants, .. }) if variants.is_empty() => Err(
                EnumlabelError::no_constants(type_name, "enum has no variants"),
            ),
            Some(Declaration::Enum { variants, .. }) => Ok(variants.clone()),
            Some(Declaration::Newtype) | None => {
                let Some(constants) = self.constants.get(type_name) else {
                    if self.declarations.contains_key(type_name) {
                        return Err(EnumlabelError::no_constants(
                            type_name,
                            "no associated constants found",
                        ));
                    }
                    return Err(EnumlabelError::type_not_found(type_name));
                };
                Ok(dedupe_by_value(type_name, constants))
            }
        }
    }

    /// Builds the generator input for `type_name`.
    pub fn enum_type(&self, type_name: &str) -> Result<EnumType> {
        let names = self.values_of_type(type_name)?;
        EnumType::new(type_name, self.name.as_str(), names)
    }

    fn visit_item(&mut self, item: &Item) {
        match item {
            Item::Enum(item_enum) => self.visit_enum(item_enum),
            Item::Struct(item_struct) => {
                self.declarations
                    .entry(item_struct.ident.to_string())
                    .or_insert(Declaration::Newtype);
            }
            Item::Impl(item_impl) => self.visit_impl(item_impl),
            _ => {}
        }
    }

    fn visit_enum(&mut self, item_enum: &ItemEnum) {
        let name = item_enum.ident.to_string();
        let data_variant = item_enum
            .variants
            .iter()
            .find(|v| !matches!(v.fields, syn::Fields::Unit))
            .map(|v| v.ident.to_string());
        let variants = item_enum
            .variants
            .iter()
            .map(|v| v.ident.to_string())
            .collect();
        trace!(type_name = %name, "Found enum");
        self.declarations.insert(
            name,
            Declaration::Enum {
                variants,
                data_variant,
            },
        );
    }

    fn visit_impl(&mut self, item_impl: &ItemImpl) {
        if item_impl.trait_.is_some() {
            return;
        }
        let Some(self_name) = type_ident(&item_impl.self_ty) else {
            return;
        };

        for impl_item in &item_impl.items {
            let ImplItem::Const(constant) = impl_item else {
                continue;
            };
            let Some(const_ty) = type_ident(&constant.ty) else {
                continue;
            };
            if const_ty != "Self" && const_ty != self_name {
                continue;
            }
            trace!(type_name = %self_name, constant = %constant.ident, "Found associated constant");
            self.constants
                .entry(self_name.clone())
                .or_default()
                .push(AssocConst {
                    name: constant.ident.to_string(),
                    value: integer_value(&constant.expr),
                });
        }
    }
}

fn package_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.replace('-', "_"))
}

fn type_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

/// Reads `3`, `-3`, `Self(3)` or `T(3)`.
fn integer_value(expr: &Expr) -> Option<i128> {
    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Int(int) => int.base10_parse::<i128>().ok(),
            _ => None,
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            integer_value(&unary.expr).map(|v| -v)
        }
        Expr::Paren(paren) => integer_value(&paren.expr),
        Expr::Call(call) if call.args.len() == 1 => call.args.first().and_then(integer_value),
        _ => None,
    }
}

fn dedupe_by_value(type_name: &str, constants: &[AssocConst]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(constants.len());
    for constant in constants {
        match constant.value {
            Some(value) if !seen.insert(value) => {
                debug!(
                    type_name,
                    constant = %constant.name,
                    %value,
                    "Skipping constant with repeated value"
                );
            }
            _ => names.push(constant.name.clone()),
        }
    }
    names
}
