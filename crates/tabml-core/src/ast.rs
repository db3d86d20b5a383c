/// One logical line of a template.
///
/// Lines form a flat sequence; nesting is carried by `level` and only turned
/// into containment when the sequence is emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Line text with indentation stripped and surrounding whitespace trimmed.
    pub content: String,
    pub level: usize,
    pub tag: LineTag,
    pub attrs: AttrList,
    /// Inline text following the selector head of an element line.
    pub body: String,
}

impl Line {
    pub fn new(level: usize, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            level,
            tag: LineTag::Text,
            attrs: AttrList::default(),
            body: String::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.tag, LineTag::Text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineTag {
    /// Emitted verbatim with no surrounding markup.
    Text,
    Element(String),
}

impl LineTag {
    pub fn name(&self) -> Option<&str> {
        match self {
            LineTag::Text => None,
            LineTag::Element(name) => Some(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrItem {
    pub key: String,
    pub value: String,
}

/// Ordered attribute map with unique keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrList {
    pub items: Vec<AttrItem>,
}

impl AttrList {
    /// Inserts `key`, overwriting the value of an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.items.iter_mut().find(|item| item.key == key) {
            Some(existing) => existing.value = value,
            None => self.items.push(AttrItem { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttrItem> {
        self.items.iter()
    }
}
