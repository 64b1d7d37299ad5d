//! SVG document tree

/// A parsed SVG document.
#[derive(Debug, Clone)]
pub struct Document {
    /// `<?xml ...?>` declaration, if present
    pub xml_declaration: Option<XmlDeclaration>,
    /// DOCTYPE contents, without the `<!DOCTYPE` and `>` delimiters
    pub doctype: Option<String>,
    /// The root `<svg>` element
    pub root: Element,
}

#[derive(Debug, Clone)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

/// An element with its attributes in source order.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A possibly prefixed XML name (`rect`, `xlink:href`, `inkscape:label`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    /// Split `prefix:local`, or keep the whole string as the local name.
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => Self::new(s),
        }
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefix.as_deref() == Some(prefix)
    }

    /// `xmlns` or `xmlns:prefix`.
    pub fn is_xmlns(&self) -> bool {
        self.has_prefix("xmlns") || (self.prefix.is_none() && self.local == "xmlns")
    }

    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: QName::parse(name),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
    ProcessingInstruction { target: String, content: Option<String> },
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: QName::parse(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an unprefixed attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.prefix.is_none() && a.name.local == name)
            .map(|a| a.value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name.prefix.is_none() && a.name.local == name)
        {
            Some(attr) => attr.value = value.into(),
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes
            .retain(|a| !(a.name.prefix.is_none() && a.name.local == name));
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.local == name
    }

    /// Value of `prop` in the inline `style` attribute. The last declaration wins.
    pub fn style_value(&self, prop: &str) -> Option<&str> {
        style_declarations(self.get_attr("style")?)?
            .into_iter()
            .rev()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Visit this element and every descendant element, parents first.
    pub fn walk(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        for child in self.child_elements() {
            child.walk(f);
        }
    }

    /// Mutable counterpart of [`Element::walk`].
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in self.child_elements_mut() {
            child.walk_mut(f);
        }
    }
}

/// Split an inline `style` into trimmed `(property, value)` pairs.
///
/// A `;` only ends a declaration outside parentheses and quotes, so
/// `url(data:image/png;base64,...)` stays whole. Returns `None` when a
/// non-empty piece is not `property:value`.
pub fn style_declarations(style: &str) -> Option<Vec<(&str, &str)>> {
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                push_declaration(&mut declarations, &style[start..i])?;
                start = i + 1;
            }
            _ => {}
        }
    }
    push_declaration(&mut declarations, &style[start..])?;

    Some(declarations)
}

fn push_declaration<'a>(out: &mut Vec<(&'a str, &'a str)>, piece: &'a str) -> Option<()> {
    let piece = piece.trim();
    if piece.is_empty() {
        return Some(());
    }
    let (prop, value) = piece.split_once(':')?;
    let prop = prop.trim();
    if prop.is_empty() {
        return None;
    }
    out.push((prop, value.trim()));
    Some(())
}
