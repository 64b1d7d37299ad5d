//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::SvgError;

/// Parse SVG text into a [`Document`].
///
/// The root element must be `<svg>`. Comments and processing instructions
/// outside the root are discarded.
pub fn parse_svg(svg: &str) -> Result<Document, SvgError> {
    let mut reader = Reader::from_str(svg);

    let mut xml_declaration = None;
    let mut doctype = None;
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                xml_declaration = Some(XmlDeclaration {
                    version: String::from_utf8_lossy(decl.version()?.as_ref()).into_owned(),
                    encoding: decl
                        .encoding()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|e| String::from_utf8_lossy(e.as_ref()).into_owned()),
                    standalone: decl
                        .standalone()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|s| &*s == b"yes"),
                });
            }
            Event::DocType(dt) => {
                doctype = Some(String::from_utf8_lossy(&dt).trim().to_string());
            }
            Event::Start(start) => {
                root = Some(parse_element(&mut reader, &start)?);
                break;
            }
            Event::Empty(start) => {
                root = Some(parse_element_start(&start)?);
                break;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let root = root.ok_or_else(|| SvgError::InvalidSvg("no root element found".into()))?;
    if !root.is("svg") {
        return Err(SvgError::InvalidSvg(format!(
            "root element is <{}>, expected <svg>",
            root.name.full_name()
        )));
    }

    Ok(Document {
        xml_declaration,
        doctype,
        root,
    })
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, SvgError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let child = parse_element(reader, &start)?;
                element.children.push(Node::Element(child));
            }
            Event::Empty(start) => {
                let child = parse_element_start(&start)?;
                element.children.push(Node::Element(child));
            }
            Event::End(_) => break,
            Event::Text(text) => {
                let text = text.unescape()?;
                element.children.push(Node::Text(text.into_owned()));
            }
            Event::Comment(comment) => {
                element
                    .children
                    .push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()));
            }
            Event::CData(cdata) => {
                element
                    .children
                    .push(Node::CData(String::from_utf8_lossy(&cdata).into_owned()));
            }
            Event::PI(pi) => {
                let content = String::from_utf8_lossy(&pi).into_owned();
                let (target, rest) = match content.split_once(char::is_whitespace) {
                    Some((t, r)) => (t.to_string(), Some(r.trim().to_string())),
                    None => (content, None),
                };
                element
                    .children
                    .push(Node::ProcessingInstruction { target, content: rest });
            }
            Event::Eof => {
                return Err(SvgError::InvalidSvg(format!(
                    "unexpected end of file inside <{}>",
                    element.name.full_name()
                )));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element, SvgError> {
    let name = std::str::from_utf8(start.name().into_inner())?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| SvgError::InvalidSvg(format!("invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute::new(key, value.into_owned()));
    }

    Ok(element)
}
