//! SVG optimization passes.

use std::collections::HashSet;

use crate::ast::*;
use crate::path::{parse_path, serialize_path};
use crate::preset::{Pass, Preset};

const EDITOR_PREFIXES: [&str; 2] = ["sodipodi", "inkscape"];

const EDITOR_NAMESPACES: [&str; 2] = [
    "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd",
    "http://www.inkscape.org/namespaces/inkscape",
];

const CONTAINER_ELEMENTS: [&str; 7] = [
    "g", "defs", "symbol", "marker", "clipPath", "mask", "pattern",
];

const COLOR_PROPERTIES: [&str; 6] = [
    "fill",
    "stroke",
    "stop-color",
    "flood-color",
    "lighting-color",
    "color",
];

/// Elements whose text content renders; whitespace inside them is significant.
const TEXT_ELEMENTS: [&str; 4] = ["text", "tspan", "textPath", "title"];

/// Presentation properties that inherit from ancestors.
const INHERITED_PROPERTIES: [&str; 13] = [
    "fill-opacity",
    "fill-rule",
    "stroke-opacity",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-dashoffset",
    "clip-rule",
    "font-style",
    "font-weight",
    "text-anchor",
    "visibility",
];

/// Containers whose content is rendered through a reference (`<use>`, `fill="url(#..)"`, ...)
/// and inherits from wherever it is instantiated.
const REFERENCED_CONTAINERS: [&str; 6] = ["symbol", "defs", "marker", "pattern", "clipPath", "mask"];

/// Attribute order used by `sortAttrs`; anything else sorts alphabetically after these.
const ATTRIBUTE_ORDER: [&str; 17] = [
    "id", "width", "height", "x", "x1", "x2", "y", "y1", "y2", "cx", "cy", "r", "fill", "stroke",
    "marker", "d", "points",
];

/// Run every pass the preset enables, in order.
pub fn optimize(doc: &mut Document, preset: &Preset) {
    cleanup_whitespace(&mut doc.root, false);

    for pass in preset.passes() {
        match pass {
            Pass::RemoveDoctype => doc.doctype = None,
            Pass::RemoveXmlProcInst => doc.xml_declaration = None,
            Pass::RemoveComments => remove_comments(&mut doc.root),
            Pass::RemoveMetadata => remove_metadata(&mut doc.root),
            Pass::RemoveEditorsNsData => remove_editors_data(&mut doc.root),
            Pass::RemoveUnusedNs => remove_unused_namespaces(&mut doc.root),
            Pass::RemoveHiddenElems => remove_hidden(&mut doc.root),
            Pass::RemoveEmptyContainers => remove_empty(&mut doc.root),
            Pass::CollapseGroups => collapse_groups(&mut doc.root),
            Pass::ConvertColors => doc.root.walk_mut(&mut convert_colors),
            Pass::RemoveUnknownsAndDefaults => {
                walk_inherited(&mut doc.root, &Inherited::default(), &mut remove_default_attrs)
            }
            Pass::ConvertPathData => {
                let precision = preset.precision;
                doc.root
                    .walk_mut(&mut |elem: &mut Element| convert_path_data(elem, precision));
            }
            Pass::MinifyStyles => {
                walk_inherited(&mut doc.root, &Inherited::default(), &mut minify_styles)
            }
            Pass::SortAttrs => doc.root.walk_mut(&mut sort_attrs),
        }
    }
}

/// Drop insignificant whitespace.
///
/// Inside text content, whitespace runs collapse to a single space. Everywhere
/// else whitespace-only nodes go and the rest is trimmed. `xml:space="preserve"`
/// subtrees are left alone.
fn cleanup_whitespace(elem: &mut Element, in_text: bool) {
    let preserve = elem
        .attributes
        .iter()
        .any(|a| a.name.has_prefix("xml") && a.name.local == "space" && a.value == "preserve");
    if preserve {
        return;
    }

    let in_text = in_text || TEXT_ELEMENTS.contains(&elem.name.local.as_str());
    if !in_text {
        elem.children
            .retain(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()));
    }
    for node in &mut elem.children {
        if let Node::Text(text) = node {
            *text = if in_text {
                collapse_whitespace(text)
            } else {
                text.trim().to_string()
            };
        }
    }

    for child in elem.child_elements_mut() {
        cleanup_whitespace(child, in_text);
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// What an element inherits from its ancestors.
#[derive(Debug, Clone, Default)]
struct Inherited {
    /// Inheritable properties set by some ancestor
    set: HashSet<String>,
    /// Inside content instantiated by reference
    referenced: bool,
}

impl Inherited {
    fn enter(&self, elem: &Element) -> Inherited {
        let mut next = self.clone();
        next.referenced |= REFERENCED_CONTAINERS.contains(&elem.name.local.as_str());

        for attr in &elem.attributes {
            if attr.name.prefix.is_none()
                && INHERITED_PROPERTIES.contains(&attr.name.local.as_str())
            {
                next.set.insert(attr.name.local.clone());
            }
        }
        if let Some(declarations) = elem.get_attr("style").and_then(style_declarations) {
            for (prop, _) in declarations {
                if INHERITED_PROPERTIES.contains(&prop) {
                    next.set.insert(prop.to_string());
                }
            }
        }

        next
    }

    /// Whether an explicit default for `prop` can go without changing the
    /// rendering. Inheritable properties only qualify when nothing above
    /// sets them and the element can't be instantiated somewhere else.
    fn can_drop_default(&self, prop: &str, has_id: bool) -> bool {
        !INHERITED_PROPERTIES.contains(&prop)
            || !(self.referenced || has_id || self.set.contains(prop))
    }
}

/// Visit every element, parents first, with what it inherits.
fn walk_inherited(
    elem: &mut Element,
    inherited: &Inherited,
    f: &mut impl FnMut(&mut Element, &Inherited),
) {
    f(elem, inherited);
    let inner = inherited.enter(elem);
    for child in elem.child_elements_mut() {
        walk_inherited(child, &inner, f);
    }
}

fn remove_comments(elem: &mut Element) {
    elem.children
        .retain(|node| !matches!(node, Node::Comment(_)));

    for child in elem.child_elements_mut() {
        remove_comments(child);
    }
}

fn remove_metadata(elem: &mut Element) {
    elem.children.retain(|node| match node {
        Node::Element(e) => !(e.is("metadata") || e.is("title") || e.is("desc")),
        _ => true,
    });

    for child in elem.child_elements_mut() {
        remove_metadata(child);
    }
}

fn is_editor_name(name: &QName) -> bool {
    EDITOR_PREFIXES.iter().any(|p| name.has_prefix(p))
}

/// Remove Inkscape/Sodipodi elements, attributes and namespace declarations.
fn remove_editors_data(elem: &mut Element) {
    elem.children.retain(|node| match node {
        Node::Element(e) => !is_editor_name(&e.name),
        _ => true,
    });

    elem.attributes.retain(|attr| {
        if attr.name.is_xmlns() {
            !EDITOR_NAMESPACES.contains(&attr.value.as_str())
        } else {
            !is_editor_name(&attr.name)
        }
    });

    for child in elem.child_elements_mut() {
        remove_editors_data(child);
    }
}

/// Remove `xmlns:prefix` declarations on the root whose prefix nothing uses.
fn remove_unused_namespaces(root: &mut Element) {
    let mut used: HashSet<String> = HashSet::new();
    root.walk(&mut |elem: &Element| {
        if let Some(prefix) = &elem.name.prefix {
            used.insert(prefix.clone());
        }
        for attr in &elem.attributes {
            if let Some(prefix) = &attr.name.prefix
                && !attr.name.is_xmlns()
            {
                used.insert(prefix.clone());
            }
        }
    });

    root.attributes
        .retain(|attr| !attr.name.has_prefix("xmlns") || used.contains(&attr.name.local));
}

fn remove_hidden(elem: &mut Element) {
    elem.children.retain(|node| match node {
        Node::Element(e) => !is_hidden(e),
        _ => true,
    });

    for child in elem.child_elements_mut() {
        remove_hidden(child);
    }
}

fn is_zero(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().trim_end_matches("px"))
        .and_then(|v| v.parse::<f64>().ok())
        == Some(0.0)
}

fn is_hidden(elem: &Element) -> bool {
    if elem.get_attr("display") == Some("none") || elem.style_value("display") == Some("none") {
        return true;
    }

    if is_zero(elem.get_attr("opacity")) {
        return true;
    }

    let local = elem.name.local.as_str();
    match local {
        "rect" | "image" | "pattern" => {
            is_zero(elem.get_attr("width")) || is_zero(elem.get_attr("height"))
        }
        "circle" => is_zero(elem.get_attr("r")),
        "ellipse" => is_zero(elem.get_attr("rx")) || is_zero(elem.get_attr("ry")),
        "path" => elem.get_attr("d").is_none_or(|d| d.trim().is_empty()),
        "polyline" | "polygon" => elem.get_attr("points").is_none_or(|p| p.trim().is_empty()),
        _ => false,
    }
}

/// Remove containers left without children. Anything with an `id` may be referenced and stays.
fn remove_empty(elem: &mut Element) {
    for child in elem.child_elements_mut() {
        remove_empty(child);
    }

    elem.children.retain(|node| match node {
        Node::Element(e) if CONTAINER_ELEMENTS.contains(&e.name.local.as_str()) => {
            !e.children.is_empty() || e.get_attr("id").is_some()
        }
        _ => true,
    });
}

/// Replace an attribute-less `<g>` wrapping a single node with that node.
fn collapse_groups(elem: &mut Element) {
    for child in elem.child_elements_mut() {
        collapse_groups(child);
    }

    let children = std::mem::take(&mut elem.children);
    elem.children = children
        .into_iter()
        .map(|node| match node {
            Node::Element(mut g)
                if g.is("g")
                    && g.name.prefix.is_none()
                    && g.attributes.is_empty()
                    && g.children.len() == 1 =>
            {
                match g.children.pop() {
                    Some(child) => child,
                    None => Node::Element(g),
                }
            }
            other => other,
        })
        .collect();
}

fn convert_colors(elem: &mut Element) {
    for attr in &mut elem.attributes {
        if attr.name.prefix.is_none() && COLOR_PROPERTIES.contains(&attr.name.local.as_str()) {
            attr.value = convert_color(&attr.value);
        }
    }

    let converted = elem.get_attr("style").and_then(|style| {
        rewrite_style(style, |prop, value| {
            if COLOR_PROPERTIES.contains(&prop) {
                Some(convert_color(value))
            } else {
                Some(value.to_string())
            }
        })
    });
    if let Some(converted) = converted {
        elem.set_attr("style", converted);
    }
}

/// Hex values whose CSS name is shorter.
const SHORT_NAMES: [(&str, &str); 17] = [
    ("#f00", "red"),
    ("#c0c0c0", "silver"),
    ("#808080", "gray"),
    ("#800000", "maroon"),
    ("#800080", "purple"),
    ("#008000", "green"),
    ("#808000", "olive"),
    ("#000080", "navy"),
    ("#008080", "teal"),
    ("#ffa500", "orange"),
    ("#a52a2a", "brown"),
    ("#ffd700", "gold"),
    ("#ffc0cb", "pink"),
    ("#dda0dd", "plum"),
    ("#d2b48c", "tan"),
    ("#ee82ee", "violet"),
    ("#f5deb3", "wheat"),
];

/// Names whose hex form is shorter.
const LONG_NAMES: [(&str, &str); 8] = [
    ("white", "#fff"),
    ("black", "#000"),
    ("yellow", "#ff0"),
    ("fuchsia", "#f0f"),
    ("magenta", "#f0f"),
    ("aqua", "#0ff"),
    ("cyan", "#0ff"),
    ("blue", "#00f"),
];

fn convert_color(color: &str) -> String {
    let trimmed = color.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some((_, hex)) = LONG_NAMES.iter().find(|(name, _)| *name == lower) {
        return hex.to_string();
    }

    let hex = if lower.starts_with("rgb(") {
        match rgb_to_hex(&lower) {
            Some(hex) => hex,
            None => return trimmed.to_string(),
        }
    } else if lower.starts_with('#') {
        lower
    } else {
        return trimmed.to_string();
    };

    let hex = shorten_hex(&hex);
    SHORT_NAMES
        .iter()
        .find(|(h, _)| *h == hex)
        .map(|(_, name)| name.to_string())
        .unwrap_or(hex)
}

/// `rgb(r, g, b)` with integer channels to `#rrggbb`.
fn rgb_to_hex(value: &str) -> Option<String> {
    let inner = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}

/// `#aabbcc` to `#abc` when every channel repeats its digit.
fn shorten_hex(hex: &str) -> String {
    let digits = hex.as_bytes();
    if digits.len() == 7
        && digits[1..].iter().all(|b| b.is_ascii_hexdigit())
        && digits[1] == digits[2]
        && digits[3] == digits[4]
        && digits[5] == digits[6]
    {
        let short = [digits[1], digits[3], digits[5]];
        format!("#{}", String::from_utf8_lossy(&short))
    } else {
        hex.to_string()
    }
}

fn remove_default_attrs(elem: &mut Element, inherited: &Inherited) {
    let element = elem.name.local.clone();
    let has_id = elem.get_attr("id").is_some();
    elem.attributes.retain(|attr| {
        attr.name.prefix.is_some()
            || !is_default_value(&element, &attr.name.local, &attr.value)
            || !inherited.can_drop_default(&attr.name.local, has_id)
    });
}

fn is_default_value(element: &str, attr: &str, value: &str) -> bool {
    match (element, attr, value) {
        ("svg", "version", "1.1") => true,
        ("svg", "baseProfile", "full") => true,
        (_, "preserveAspectRatio", "xMidYMid meet") => true,

        // Presentation attributes
        (_, "fill-opacity", "1") => true,
        (_, "stroke-opacity", "1") => true,
        (_, "opacity", "1") => true,
        (_, "stroke-width", "1") => true,
        (_, "stroke-linecap", "butt") => true,
        (_, "stroke-linejoin", "miter") => true,
        (_, "stroke-miterlimit", "4") => true,
        (_, "stroke-dashoffset", "0") => true,
        (_, "fill-rule", "nonzero") => true,
        (_, "clip-rule", "nonzero") => true,
        (_, "font-style", "normal") => true,
        (_, "font-weight", "normal") | (_, "font-weight", "400") => true,
        (_, "text-anchor", "start") => true,
        (_, "visibility", "visible") => true,
        (_, "display", "inline") => true,

        // Geometry
        ("rect", "x" | "y" | "rx" | "ry", "0") => true,
        ("circle" | "ellipse", "cx" | "cy", "0") => true,
        ("line", "x1" | "y1" | "x2" | "y2", "0") => true,

        _ => false,
    }
}

fn convert_path_data(elem: &mut Element, precision: u8) {
    if !elem.is("path") {
        return;
    }
    let Some(d) = elem.get_attr("d") else { return };
    // Unparsable data is left as written.
    if let Ok(path) = parse_path(d) {
        let minified = serialize_path(&path, precision);
        elem.set_attr("d", minified);
    }
}

/// A style declaration beats the attribute of the same name, so a default is
/// only dropped when no such attribute exists.
fn minify_styles(elem: &mut Element, inherited: &Inherited) {
    let has_id = elem.get_attr("id").is_some();
    let Some(style) = elem.get_attr("style") else { return };
    let minified = rewrite_style(style, |prop, value| {
        let droppable = is_default_style_value(prop, value)
            && elem.get_attr(prop).is_none()
            && inherited.can_drop_default(prop, has_id);
        (!droppable).then(|| value.to_string())
    });
    let Some(minified) = minified else { return };
    if minified.is_empty() {
        elem.remove_attr("style");
    } else {
        elem.set_attr("style", minified);
    }
}

/// Rebuild a `style` attribute as `prop:value;prop:value`, letting `f` rewrite
/// or drop (`None`) each declaration. Styles that don't split cleanly give `None`.
fn rewrite_style(style: &str, f: impl Fn(&str, &str) -> Option<String>) -> Option<String> {
    let rewritten = style_declarations(style)?
        .into_iter()
        .filter_map(|(prop, value)| f(prop, value).map(|value| format!("{}:{}", prop, value)))
        .collect::<Vec<_>>()
        .join(";");
    Some(rewritten)
}

fn is_default_style_value(prop: &str, value: &str) -> bool {
    matches!(
        (prop, value),
        ("fill-opacity", "1")
            | ("stroke-opacity", "1")
            | ("opacity", "1")
            | ("stroke-width", "1")
            | ("font-style", "normal")
            | ("font-weight", "normal")
            | ("font-weight", "400")
    )
}

fn sort_attrs(elem: &mut Element) {
    fn rank(name: &QName) -> (u8, usize, String) {
        let full = name.full_name();
        if name.is_xmlns() {
            // Default namespace before prefixed declarations.
            return (0, usize::from(name.prefix.is_some()), full);
        }
        match ATTRIBUTE_ORDER.iter().position(|a| *a == full) {
            Some(pos) => (1, pos, full),
            None => (2, 0, full),
        }
    }

    elem.attributes.sort_by_cached_key(|attr| rank(&attr.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_svg;
    use crate::serialize::serialize;

    fn run(svg: &str, preset: &Preset) -> String {
        let mut doc = parse_svg(svg).unwrap();
        optimize(&mut doc, preset);
        serialize(&doc)
    }

    #[test]
    fn color_conversion() {
        assert_eq!(convert_color("#ffffff"), "#fff");
        assert_eq!(convert_color("#FF0000"), "red");
        assert_eq!(convert_color("#aabbcc"), "#abc");
        assert_eq!(convert_color("#abcdef"), "#abcdef");
        assert_eq!(convert_color("white"), "#fff");
        assert_eq!(convert_color("rgb(255, 0, 0)"), "red");
        assert_eq!(convert_color("rgb(18,52,86)"), "#123456");
        assert_eq!(convert_color("none"), "none");
        assert_eq!(convert_color("url(#grad)"), "url(#grad)");
        assert_eq!(convert_color("currentColor"), "currentColor");
    }

    #[test]
    fn default_values() {
        assert!(is_default_value("svg", "version", "1.1"));
        assert!(is_default_value("rect", "opacity", "1"));
        assert!(!is_default_value("rect", "opacity", "0.5"));
        assert!(!is_default_value("rect", "width", "0"));
    }

    #[test]
    fn hidden_elements_follow_the_preset() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <rect width="0" height="10"/>
            <g display="none"><circle r="2"/></g>
            <circle r="0"/>
            <path d=""/>
            <circle r="3"/>
        </svg>"#;

        let out = run(svg, &Preset::default());
        assert_eq!(out, r#"<svg xmlns="http://www.w3.org/2000/svg"><circle r="3"/></svg>"#);

        let keep = Preset::default().with_override(Pass::RemoveHiddenElems, false);
        let out = run(svg, &keep);
        assert!(out.contains(r#"<rect width="0" height="10"/>"#));
        assert!(out.contains(r#"<g display="none">"#));
        assert!(out.contains(r#"<circle r="0"/>"#));
    }

    #[test]
    fn style_display_none_is_hidden() {
        let mut elem = Element::new("use");
        elem.set_attr("style", "fill:red; display: none");
        assert!(is_hidden(&elem));
    }

    #[test]
    fn empty_containers_keep_ids() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><defs/><symbol id="a"/><g><g/></g></svg>"#;
        let out = run(svg, &Preset::default());
        assert_eq!(out, r#"<svg xmlns="http://www.w3.org/2000/svg"><symbol id="a"/></svg>"#);
    }

    #[test]
    fn groups_with_attributes_are_not_collapsed() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><g><rect width="1" height="1"/></g><g class="c"><rect width="2" height="2"/></g></svg>"#;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1"/><g class="c"><rect width="2" height="2"/></g></svg>"#
        );
    }

    #[test]
    fn editor_data_and_unused_namespaces() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"
             xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
             xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
             xmlns:dc="http://purl.org/dc/elements/1.1/"
             inkscape:version="1.0">
          <sodipodi:namedview inkscape:zoom="1"/>
          <rect inkscape:label="box" width="4" height="4"/>
        </svg>"#;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="4" height="4"/></svg>"#
        );
    }

    #[test]
    fn styles_are_trimmed_and_defaults_dropped() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1" style=" opacity: 1 ; fill : #FFFFFF "/><rect width="1" height="1" style="opacity:1"/></svg>"#;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1" style="fill:#fff"/><rect width="1" height="1"/></svg>"#
        );
    }

    #[test]
    fn attribute_order() {
        let svg = r##"<svg viewBox="0 0 1 1" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns="http://www.w3.org/2000/svg"><use y="2" xlink:href="#a" x="1" id="u" class="k"/></svg>"##;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 1 1"><use id="u" x="1" y="2" class="k" xlink:href="#a"/></svg>"##
        );
    }

    #[test]
    fn disabled_preset_only_drops_whitespace() {
        let preset = Pass::ALL
            .into_iter()
            .fold(Preset::default(), |p, pass| p.with_override(pass, false));
        let svg = "<?xml version=\"1.0\"?>\n<svg version=\"1.1\">\n  <!--c-->\n  <title>t</title>\n</svg>";
        let out = run(svg, &preset);
        assert_eq!(
            out,
            r#"<?xml version="1.0"?><svg version="1.1"><!--c--><title>t</title></svg>"#
        );
    }

    #[test]
    fn inherited_defaults_are_kept_under_a_setting_ancestor() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><g stroke="#000" stroke-width="3"><path stroke-width="1" d="M0 0L9 9"/></g><path stroke="#000" stroke-width="1" d="M0 0L9 9"/></svg>"##;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><g stroke="#000" stroke-width="3"><path d="M0 0 9 9" stroke-width="1"/></g><path stroke="#000" d="M0 0 9 9"/></svg>"##
        );
    }

    #[test]
    fn ancestor_style_counts_as_setting_a_property() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><g style="font-weight:bold"><text font-weight="normal">a</text></g></svg>"#;
        let out = run(svg, &Preset::default());
        assert!(out.contains(r#"<text font-weight="normal">a</text>"#));
    }

    #[test]
    fn symbol_content_keeps_inheritable_defaults() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><symbol id="s"><path stroke-linecap="butt" opacity="1" d="M0 0L9 9"/></symbol><path id="p" fill-rule="nonzero" d="M1 1L2 2"/></svg>"#;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><symbol id="s"><path d="M0 0 9 9" stroke-linecap="butt"/></symbol><path id="p" d="M1 1 2 2" fill-rule="nonzero"/></svg>"#
        );
    }

    #[test]
    fn style_declaration_overrides_attribute() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><path stroke="#000" stroke-width="3" style="stroke-width:1" d="M0 0L9 9"/></svg>"##;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><path stroke="#000" d="M0 0 9 9" stroke-width="3" style="stroke-width:1"/></svg>"##
        );
    }

    #[test]
    fn style_values_with_semicolons_survive() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1" style="fill:url(data:image/png;base64,AAAA); opacity: 1"/></svg>"#;
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1" style="fill:url(data:image/png;base64,AAAA)"/></svg>"#
        );
    }

    #[test]
    fn unsplittable_style_is_left_alone() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1" style="fill:#FFFFFF; bogus"/></svg>"##;
        let out = run(svg, &Preset::default());
        assert!(out.contains(r##"style="fill:#FFFFFF; bogus""##));
    }

    #[test]
    fn text_content_keeps_word_spacing() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <text x=\"1\">Hello <tspan>world</tspan>\n    again</text>\n  <text><tspan>a</tspan> <tspan>b</tspan></text>\n</svg>";
        let out = run(svg, &Preset::default());
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text x="1">Hello <tspan>world</tspan> again</text><text><tspan>a</tspan> <tspan>b</tspan></text></svg>"#
        );
    }

    #[test]
    fn preserved_whitespace_is_untouched() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><text xml:space="preserve">a   b</text></svg>"#;
        let out = run(svg, &Preset::default());
        assert!(out.contains(r#"<text xml:space="preserve">a   b</text>"#));
        assert_eq!(collapse_whitespace(" a \n\t b "), " a b ");
    }
}
