// Code generated by enumlabel generate -t CustomStatus --prefix-to-drop CustomStatus --snake-case --all-caps --to-string tests/generated; DO NOT EDIT.
// Package: generated

/// Label lookup tables for [`CustomStatus`], built once and held for as long as they are needed.
#[derive(Debug, Clone)]
pub struct CustomStatusLabels {
    name_to_value: ::std::collections::HashMap<::std::string::String, CustomStatus>,
    value_to_name: ::std::collections::HashMap<CustomStatus, ::std::string::String>,
    renderer: ::std::option::Option<fn(CustomStatus) -> ::std::string::String>,
}
impl CustomStatusLabels {
    pub const TYPE_NAME: &'static str = "CustomStatus";
    pub const PACKAGE: &'static str = "generated";
    /// Declared constants and their derived labels, in declaration order.
    pub const TABLE: &'static [(CustomStatus, &'static str)] = &[
        (CustomStatus::CustomStatusError, "ERROR"),
        (CustomStatus::CustomStatusOK, "OK"),
        (CustomStatus::CustomStatusFun, "FUN"),
        (CustomStatus::CustomStatusNoFun, "NO_FUN"),
    ];
    /// Builds the tables from the derived labels.
    pub fn new() -> Self {
        Self::build(::std::option::Option::None)
    }
    /// Builds the tables with a hand-written renderer whose output replaces the
    /// derived labels for rendering and decoding. When the renderer gives two
    /// constants the same string, decoding it yields the later constant.
    pub fn with_renderer(renderer: fn(CustomStatus) -> ::std::string::String) -> Self {
        Self::build(::std::option::Option::Some(renderer))
    }
    /// Like `with_renderer`, but fails when the renderer gives two constants
    /// the same string.
    pub fn try_with_renderer(
        renderer: fn(CustomStatus) -> ::std::string::String,
    ) -> ::std::result::Result<Self, ::enumlabel::runtime::LabelError> {
        let mut seen = ::std::collections::HashSet::with_capacity(Self::TABLE.len());
        for &(value, _) in Self::TABLE {
            let name = renderer(value);
            if !seen.insert(::std::clone::Clone::clone(&name)) {
                return ::std::result::Result::Err(
                    ::enumlabel::runtime::LabelError::render_collision(
                        Self::TYPE_NAME,
                        name,
                    ),
                );
            }
        }
        ::std::result::Result::Ok(Self::build(::std::option::Option::Some(renderer)))
    }
    fn build(
        renderer: ::std::option::Option<fn(CustomStatus) -> ::std::string::String>,
    ) -> Self {
        let mut name_to_value = ::std::collections::HashMap::with_capacity(
            Self::TABLE.len(),
        );
        let mut value_to_name = ::std::collections::HashMap::with_capacity(
            Self::TABLE.len(),
        );
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
    /// Returns the label of `value`, preferring the custom renderer.
    pub fn render(
        &self,
        value: CustomStatus,
    ) -> ::std::result::Result<::std::string::String, ::enumlabel::runtime::LabelError> {
        let label = self
            .value_to_name
            .get(&value)
            .ok_or_else(|| {
                ::enumlabel::runtime::LabelError::invalid_value(
                    Self::TYPE_NAME,
                    ::std::format!("{:?}", value),
                )
            })?;
        ::std::result::Result::Ok(
            match self.renderer {
                ::std::option::Option::Some(render) => render(value),
                ::std::option::Option::None => ::std::clone::Clone::clone(label),
            },
        )
    }
    /// Looks a label up in the forward mapping.
    pub fn lookup(
        &self,
        label: &str,
    ) -> ::std::result::Result<CustomStatus, ::enumlabel::runtime::LabelError> {
        self.name_to_value
            .get(label)
            .copied()
            .ok_or_else(|| ::enumlabel::runtime::LabelError::invalid_label(
                Self::TYPE_NAME,
                label,
            ))
    }
    /// Encodes `value` as a JSON string.
    pub fn encode(
        &self,
        value: CustomStatus,
    ) -> ::std::result::Result<::std::string::String, ::enumlabel::runtime::LabelError> {
        let label = self.render(value)?;
        ::std::result::Result::Ok(::enumlabel::serde_json::to_string(&label)?)
    }
    /// Decodes a JSON string payload.
    pub fn decode(
        &self,
        data: &str,
    ) -> ::std::result::Result<CustomStatus, ::enumlabel::runtime::LabelError> {
        let label: ::std::string::String = ::enumlabel::serde_json::from_str(data)
            .map_err(|_| ::enumlabel::runtime::LabelError::not_a_string(
                Self::TYPE_NAME,
                data,
            ))?;
        self.lookup(&label)
    }
    /// Decodes an already parsed JSON node.
    pub fn decode_value(
        &self,
        value: &::enumlabel::serde_json::Value,
    ) -> ::std::result::Result<CustomStatus, ::enumlabel::runtime::LabelError> {
        match value.as_str() {
            ::std::option::Option::Some(label) => self.lookup(label),
            ::std::option::Option::None => {
                ::std::result::Result::Err(
                    ::enumlabel::runtime::LabelError::not_a_string(
                        Self::TYPE_NAME,
                        value.to_string(),
                    ),
                )
            }
        }
    }
    /// Reads a value coming from an untyped store column.
    pub fn scan(
        &self,
        input: &::enumlabel::runtime::ScanValue,
    ) -> ::std::result::Result<CustomStatus, ::enumlabel::runtime::LabelError> {
        match input {
            ::enumlabel::runtime::ScanValue::Bytes(bytes) => {
                self.lookup(&::std::string::String::from_utf8_lossy(bytes))
            }
            ::enumlabel::runtime::ScanValue::Text(text) => self.lookup(text),
            other => {
                ::std::result::Result::Err(
                    ::enumlabel::runtime::LabelError::scan_mismatch(
                        other.kind(),
                        Self::TYPE_NAME,
                    ),
                )
            }
        }
    }
    /// Produces the value to store in an untyped store column.
    pub fn to_scan_value(
        &self,
        value: CustomStatus,
    ) -> ::std::result::Result<
        ::enumlabel::runtime::ScanValue,
        ::enumlabel::runtime::LabelError,
    > {
        self.render(value).map(::enumlabel::runtime::ScanValue::Text)
    }
    /// Every label accepted by `decode` and `scan`.
    pub fn list(&self) -> ::std::collections::BTreeSet<::std::string::String> {
        self.name_to_value.keys().cloned().collect()
    }
}
impl ::std::default::Default for CustomStatusLabels {
    fn default() -> Self {
        Self::new()
    }
}
impl CustomStatus {
    /// Renders this value through `labels`.
    pub fn to_label_string(
        self,
        labels: &CustomStatusLabels,
    ) -> ::std::result::Result<::std::string::String, ::enumlabel::runtime::LabelError> {
        labels.render(self)
    }
}
