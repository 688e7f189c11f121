//! Rust source emission for label codecs.
//!
//! Builds the companion items for one type with [`quote`], re-parses them
//! with `syn` as a sanity check and formats them with [`prettyplease`].
//!
//! The output is meant to be `include!`d into the module that declares the
//! target type, so every path in it is fully qualified and nothing is
//! imported. The target type must be `Copy + Eq + Hash + Debug`.

use crate::collision::CollisionGuard;
use crate::error::{EnumlabelError, Result};
use crate::types::{LabelEntry, validate_identifier};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::{debug, info};

/// Path under which generated code finds the runtime module and `serde_json`.
pub const DEFAULT_RUNTIME_PATH: &str = "::enumlabel";

/// Knobs of the emission step that are not part of the label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Command line recorded in the generated header.
    pub command: String,
    /// Crate path exposing `runtime` and `serde_json`.
    pub runtime_path: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            command: String::new(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

impl EmitOptions {
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_runtime_path(mut self, runtime_path: impl Into<String>) -> Self {
        self.runtime_path = runtime_path.into();
        self
    }
}

/// Renders the label codec for one type with default options.
pub fn emit(
    type_name: &str,
    package_name: &str,
    entries: &[LabelEntry],
    emit_to_string: bool,
) -> Result<String> {
    emit_with(
        &EmitOptions::default(),
        type_name,
        package_name,
        entries,
        emit_to_string,
    )
}

/// Renders the label codec for one type.
pub fn emit_with(
    options: &EmitOptions,
    type_name: &str,
    package_name: &str,
    entries: &[LabelEntry],
    emit_to_string: bool,
) -> Result<String> {
    validate_identifier(type_name)?;
    if entries.is_empty() {
        return Err(EnumlabelError::EmptyType {
            type_name: type_name.to_string(),
        });
    }

    let mut guard = CollisionGuard::new();
    for entry in entries {
        validate_identifier(&entry.declared_name)?;
        guard.admit(&entry.declared_name, &entry.label)?;
    }

    let runtime: syn::Path = syn::parse_str(&options.runtime_path).map_err(|e| {
        EnumlabelError::config(format!(
            "invalid runtime path {:?}: {}",
            options.runtime_path, e
        ))
    })?;

    let tokens = codec_tokens(&runtime, type_name, package_name, entries, emit_to_string);
    debug!(type_name, runtime = %options.runtime_path, "Codec tokens built");

    let file: syn::File =
        syn::parse2(tokens).map_err(|e| EnumlabelError::emit(type_name, e.to_string()))?;
    let body = prettyplease::unparse(&file);

    let output = format!("{}{}", header(options, package_name), body);
    info!(
        type_name,
        entry_count = entries.len(),
        output_length = output.len(),
        "Label codec emitted"
    );
    Ok(output)
}

fn header(options: &EmitOptions, package_name: &str) -> String {
    let command = if options.command.is_empty() {
        String::new()
    } else {
        format!(" {}", options.command)
    };
    format!(
        "// Code generated by enumlabel{}; DO NOT EDIT.\n// Package: {}\n\n",
        command, package_name
    )
}

fn codec_tokens(
    rt: &syn::Path,
    type_name: &str,
    package_name: &str,
    entries: &[LabelEntry],
    emit_to_string: bool,
) -> TokenStream {
    let ty = format_ident!("{}", type_name);
    let labels_ty = format_ident!("{}Labels", type_name);

    let constants: Vec<TokenStream> = entries
        .iter()
        .map(|entry| {
            let constant = format_ident!("{}", entry.declared_name);
            quote! { #ty::#constant }
        })
        .collect();
    let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();

    let struct_doc = format!(
        " Label lookup tables for [`{}`], built once and held for as long as they are needed.",
        type_name
    );
    let to_string_impl = if emit_to_string {
        to_string_tokens(rt, &ty, &labels_ty)
    } else {
        quote! {}
    };

    quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone)]
        pub struct #labels_ty {
            name_to_value: ::std::collections::HashMap<::std::string::String, #ty>,
            value_to_name: ::std::collections::HashMap<#ty, ::std::string::String>,
            renderer: ::std::option::Option<fn(#ty) -> ::std::string::String>,
        }

        impl #labels_ty {
            pub const TYPE_NAME: &'static str = #type_name;
            pub const PACKAGE: &'static str = #package_name;
            #[doc = " Declared constants and their derived labels, in declaration order."]
            pub const TABLE: &'static [(#ty, &'static str)] = &[
                #( (#constants, #labels), )*
            ];

            #[doc = " Builds the tables from the derived labels."]
            pub fn new() -> Self {
                Self::build(::std::option::Option::None)
            }

            #[doc = " Builds the tables with a hand-written renderer whose output replaces the"]
            #[doc = " derived labels for rendering and decoding. When the renderer gives two"]
            #[doc = " constants the same string, decoding it yields the later constant."]
            pub fn with_renderer(renderer: fn(#ty) -> ::std::string::String) -> Self {
                Self::build(::std::option::Option::Some(renderer))
            }

            #[doc = " Like `with_renderer`, but fails when the renderer gives two constants"]
            #[doc = " the same string."]
            pub fn try_with_renderer(
                renderer: fn(#ty) -> ::std::string::String,
            ) -> ::std::result::Result<Self, #rt::runtime::LabelError> {
                let mut seen = ::std::collections::HashSet::with_capacity(Self::TABLE.len());
                for &(value, _) in Self::TABLE {
                    let name = renderer(value);
                    if !seen.insert(::std::clone::Clone::clone(&name)) {
                        return ::std::result::Result::Err(
                            #rt::runtime::LabelError::render_collision(Self::TYPE_NAME, name),
                        );
                    }
                }
                ::std::result::Result::Ok(Self::build(::std::option::Option::Some(renderer)))
            }

            fn build(renderer: ::std::option::Option<fn(#ty) -> ::std::string::String>) -> Self {
                let mut name_to_value = ::std::collections::HashMap::with_capacity(Self::TABLE.len());
                let mut value_to_name = ::std::collections::HashMap::with_capacity(Self::TABLE.len());
                for &(value, label) in Self::TABLE {
                    let name = match renderer {
                        ::std::option::Option::Some(render) => render(value),
                        ::std::option::Option::None => ::std::string::ToString::to_string(label),
                    };
                    name_to_value.insert(name, value);
                    value_to_name.insert(value, ::std::string::ToString::to_string(label));
                }
                Self {
                    name_to_value,
                    value_to_name,
                    renderer,
                }
            }

            pub fn has_renderer(&self) -> bool {
                self.renderer.is_some()
            }

            #[doc = " Returns the label of `value`, preferring the custom renderer."]
            pub fn render(&self, value: #ty) -> ::std::result::Result<::std::string::String, #rt::runtime::LabelError> {
                let label = self.value_to_name.get(&value).ok_or_else(|| {
                    #rt::runtime::LabelError::invalid_value(Self::TYPE_NAME, ::std::format!("{:?}", value))
                })?;
                ::std::result::Result::Ok(match self.renderer {
                    ::std::option::Option::Some(render) => render(value),
                    ::std::option::Option::None => ::std::clone::Clone::clone(label),
                })
            }

            #[doc = " Looks a label up in the forward mapping."]
            pub fn lookup(&self, label: &str) -> ::std::result::Result<#ty, #rt::runtime::LabelError> {
                self.name_to_value
                    .get(label)
                    .copied()
                    .ok_or_else(|| #rt::runtime::LabelError::invalid_label(Self::TYPE_NAME, label))
            }

            #[doc = " Encodes `value` as a JSON string."]
            pub fn encode(&self, value: #ty) -> ::std::result::Result<::std::string::String, #rt::runtime::LabelError> {
                let label = self.render(value)?;
                ::std::result::Result::Ok(#rt::serde_json::to_string(&label)?)
            }

            #[doc = " Decodes a JSON string payload."]
            pub fn decode(&self, data: &str) -> ::std::result::Result<#ty, #rt::runtime::LabelError> {
                let label: ::std::string::String = #rt::serde_json::from_str(data)
                    .map_err(|_| #rt::runtime::LabelError::not_a_string(Self::TYPE_NAME, data))?;
                self.lookup(&label)
            }

            #[doc = " Decodes an already parsed JSON node."]
            pub fn decode_value(&self, value: &#rt::serde_json::Value) -> ::std::result::Result<#ty, #rt::runtime::LabelError> {
                match value.as_str() {
                    ::std::option::Option::Some(label) => self.lookup(label),
                    ::std::option::Option::None => ::std::result::Result::Err(
                        #rt::runtime::LabelError::not_a_string(Self::TYPE_NAME, value.to_string()),
                    ),
                }
            }

            #[doc = " Reads a value coming from an untyped store column."]
            pub fn scan(&self, input: &#rt::runtime::ScanValue) -> ::std::result::Result<#ty, #rt::runtime::LabelError> {
                match input {
                    #rt::runtime::ScanValue::Bytes(bytes) => {
                        self.lookup(&::std::string::String::from_utf8_lossy(bytes))
                    }
                    #rt::runtime::ScanValue::Text(text) => self.lookup(text),
                    other => ::std::result::Result::Err(
                        #rt::runtime::LabelError::scan_mismatch(other.kind(), Self::TYPE_NAME),
                    ),
                }
            }

            #[doc = " Produces the value to store in an untyped store column."]
            pub fn to_scan_value(&self, value: #ty) -> ::std::result::Result<#rt::runtime::ScanValue, #rt::runtime::LabelError> {
                self.render(value).map(#rt::runtime::ScanValue::Text)
            }

            #[doc = " Every label accepted by `decode` and `scan`."]
            pub fn list(&self) -> ::std::collections::BTreeSet<::std::string::String> {
                self.name_to_value.keys().cloned().collect()
            }
        }

        impl ::std::default::Default for #labels_ty {
            fn default() -> Self {
                Self::new()
            }
        }

        #to_string_impl
    }
}

fn to_string_tokens(rt: &syn::Path, ty: &syn::Ident, labels_ty: &syn::Ident) -> TokenStream {
    quote! {
        impl #ty {
            #[doc = " Renders this value through `labels`."]
            pub fn to_label_string(self, labels: &#labels_ty) -> ::std::result::Result<::std::string::String, #rt::runtime::LabelError> {
                labels.render(self)
            }
        }
    }
}
