use anyhow::Result;
use quick_xml::{
	Writer,
	events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

/// Thin event writer shared by the XML based encoders.
pub struct XmlWriter {
	writer: Writer<Vec<u8>>,
}

impl XmlWriter {
	/// Starts a document with the XML declaration.
	pub fn new() -> Result<XmlWriter> {
		let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
		writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
		Ok(XmlWriter { writer })
	}

	pub fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
		let mut tag = BytesStart::new(name);
		tag.extend_attributes(attributes.iter().copied());
		self.writer.write_event(Event::Start(tag))?;
		Ok(())
	}

	pub fn end(&mut self, name: &str) -> Result<()> {
		self.writer.write_event(Event::End(BytesEnd::new(name)))?;
		Ok(())
	}

	pub fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
		let mut tag = BytesStart::new(name);
		tag.extend_attributes(attributes.iter().copied());
		self.writer.write_event(Event::Empty(tag))?;
		Ok(())
	}

	/// Writes `<name>text</name>`, escaping `text`.
	pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
		self.start(name, &[])?;
		self.writer.write_event(Event::Text(BytesText::new(text)))?;
		self.end(name)
	}

	pub fn finish(self) -> Vec<u8> {
		let mut bytes = self.writer.into_inner();
		bytes.push(b'\n');
		bytes
	}
}
