//! Minified XML output.

use crate::ast::*;

/// Serialize a document without any insignificant whitespace.
///
/// Whitespace cleanup happens in the optimization passes; text is written out
/// as it is in the tree.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();

    if let Some(decl) = &doc.xml_declaration {
        out.push_str("<?xml version=\"");
        out.push_str(&decl.version);
        out.push('"');
        if let Some(enc) = &decl.encoding {
            out.push_str(" encoding=\"");
            out.push_str(enc);
            out.push('"');
        }
        if let Some(standalone) = decl.standalone {
            out.push_str(" standalone=\"");
            out.push_str(if standalone { "yes" } else { "no" });
            out.push('"');
        }
        out.push_str("?>");
    }

    if let Some(dt) = &doc.doctype {
        out.push_str("<!DOCTYPE ");
        out.push_str(dt);
        out.push('>');
    }

    write_element(&mut out, &doc.root);
    out
}

fn write_element(out: &mut String, elem: &Element) {
    let name = elem.name.full_name();
    out.push('<');
    out.push_str(&name);

    for attr in &elem.attributes {
        out.push(' ');
        out.push_str(&attr.name.full_name());
        out.push_str("=\"");
        push_escaped(out, &attr.value, true);
        out.push('"');
    }

    if elem.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &elem.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(elem) => write_element(out, elem),
        Node::Text(text) => push_escaped(out, text, false),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::CData(data) => {
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
        }
        Node::ProcessingInstruction { target, content } => {
            out.push_str("<?");
            out.push_str(target);
            if let Some(c) = content {
                out.push(' ');
                out.push_str(c);
            }
            out.push_str("?>");
        }
    }
}

fn push_escaped(out: &mut String, s: &str, in_attribute: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
