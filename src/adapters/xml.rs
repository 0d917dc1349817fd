use crate::core::collection::Collection;
use crate::core::university::University;
use crate::core::{Entity, Format};
use crate::domain::entity::Record;
use crate::utils::error::{Result, UniversityError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

const ROOT_TAG: &str = "university";
const INDENT: usize = 2;

/// XML document rooted at `<university>`, one section per collection and one
/// leaf element per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl Format for XmlFormat {
    fn name(&self) -> &'static str {
        "XML"
    }

    fn extension(&self) -> &'static str {
        "xml"
    }

    fn encode(&self, data: &University) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
        write_collection(&mut writer, &data.students)?;
        write_collection(&mut writer, &data.professors)?;
        write_collection(&mut writer, &data.courses)?;
        write_collection(&mut writer, &data.departments)?;
        write_collection(&mut writer, &data.grades)?;
        writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<University> {
        let text = std::str::from_utf8(bytes)?;
        let root = XmlNode::parse(text)?;
        if root.name != ROOT_TAG {
            return Err(UniversityError::invalid_data(format!(
                "expected <{}> root element, found <{}>",
                ROOT_TAG, root.name
            )));
        }

        Ok(University {
            students: read_collection(&root)?,
            professors: read_collection(&root)?,
            courses: read_collection(&root)?,
            departments: read_collection(&root)?,
            grades: read_collection(&root)?,
        })
    }
}

fn write_collection<T: Entity, W: Write>(
    writer: &mut Writer<W>,
    collection: &Collection<T>,
) -> Result<()> {
    if collection.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(T::COLLECTION)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(T::COLLECTION)))?;
    for entity in collection {
        writer.write_event(Event::Start(BytesStart::new(T::TAG)))?;
        for (name, value) in entity.to_record().iter() {
            let text = value.to_string();
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(T::TAG)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(T::COLLECTION)))?;
    Ok(())
}

/// Reads the `T::COLLECTION` section of the document. Field elements that are
/// absent, empty or whitespace-only are skipped, so `from_record` reports them
/// as missing. Any other text is kept exactly as written.
fn read_collection<T: Entity>(root: &XmlNode) -> Result<Collection<T>> {
    let mut collection = Collection::new();
    let Some(section) = root.find(T::COLLECTION) else {
        return Ok(collection);
    };

    for element in section.find_all(T::TAG) {
        let mut record = Record::new();
        for field in T::FIELDS {
            let Some(text) = element.find(field.name).and_then(XmlNode::significant_text) else {
                tracing::debug!("{} element without '{}' text", T::TAG, field.name);
                continue;
            };
            record.push(field.name, field.kind.parse(field.name, text)?);
        }
        collection.push(T::from_record(&record)?);
    }

    Ok(collection)
}

/// Minimal element tree: names, text and children. Attributes are ignored.
#[derive(Debug, Clone, PartialEq)]
struct XmlNode {
    name: String,
    text: Option<String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    fn new(name: String) -> Self {
        Self {
            name,
            text: None,
            children: Vec::new(),
        }
    }

    fn find(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Leaf text, or `None` when the element has children or only whitespace.
    fn significant_text(&self) -> Option<&str> {
        if !self.children.is_empty() {
            return None;
        }
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }

    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    fn parse(text: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(text);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push(XmlNode::new(element_name(&e)));
                }
                Event::Empty(e) => {
                    let node = XmlNode::new(element_name(&e));
                    attach(&mut stack, &mut root, node)?;
                }
                Event::End(_) => {
                    let mut node = stack
                        .pop()
                        .ok_or_else(|| UniversityError::invalid_data("unexpected closing tag"))?;
                    // Containers only carry indentation between their children.
                    if !node.children.is_empty() {
                        node.text = None;
                    }
                    attach(&mut stack, &mut root, node)?;
                }
                Event::Text(e) => {
                    if let Some(node) = stack.last_mut() {
                        node.append_text(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(node) = stack.last_mut() {
                        node.append_text(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(UniversityError::invalid_data(format!(
                "element <{}> is never closed",
                open.name
            )));
        }
        root.ok_or_else(|| UniversityError::invalid_data("document has no root element"))
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => {
            return Err(UniversityError::invalid_data(format!(
                "unexpected second root element <{}>",
                node.name
            )))
        }
    }
    Ok(())
}
