//! Structured SVG nodes.
//!
//! Renderers build [`Element`] trees and wrap them in [`Fragment`]s. Nothing
//! is turned into markup until a [`Document`] is serialized, so fragment
//! order is decided by the composer alone and never by string splicing.

use std::fmt::{self, Write};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

// ============================================================================
// Numbers
// ============================================================================

/// A coordinate formatted for attribute output.
///
/// Rounded to three decimals with trailing zeros dropped, so identical
/// geometry always serializes to identical text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        if rounded == 0.0 {
            // Also folds -0 into 0.
            f.write_str("0")
        } else {
            write!(f, "{}", rounded)
        }
    }
}

// ============================================================================
// PathData
// ============================================================================

/// Builder for the `d` attribute of a `<path>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData(String);

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn command(mut self, cmd: char, points: &[(f64, f64)]) -> Self {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push(cmd);
        for (x, y) in points {
            // Writing into a String cannot fail.
            let _ = write!(self.0, " {},{}", Num(*x), Num(*y));
        }
        self
    }

    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.command('M', &[(x, y)])
    }

    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.command('L', &[(x, y)])
    }

    /// Quadratic Bézier through control point `(cx, cy)` to `(x, y)`.
    pub fn quad_to(self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.command('Q', &[(cx, cy), (x, y)])
    }

    /// Cubic Bézier through `(c1x, c1y)` and `(c2x, c2y)` to `(x, y)`.
    pub fn cubic_to(self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.command('C', &[(c1x, c1y), (c2x, c2y), (x, y)])
    }

    pub fn close(mut self) -> Self {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push('Z');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Element
// ============================================================================

/// A single SVG element with ordered attributes and child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<circle cx cy r>`.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new("circle").num("cx", cx).num("cy", cy).num("r", r)
    }

    /// `<ellipse cx cy rx ry>`.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::new("ellipse")
            .num("cx", cx)
            .num("cy", cy)
            .num("rx", rx)
            .num("ry", ry)
    }

    /// `<path d>`.
    pub fn path(d: PathData) -> Self {
        Self::new("path").attr("d", d)
    }

    /// `<polygon points>`.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let points = points
            .iter()
            .map(|(x, y)| format!("{},{}", Num(*x), Num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        Self::new("polygon").attr("points", points)
    }

    /// Appends an attribute.
    pub fn attr(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    /// Appends a numeric attribute, formatted with [`Num`].
    pub fn num(self, key: &'static str, value: f64) -> Self {
        self.attr(key, Num(value))
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child elements.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value of the first attribute named `key`.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// Serializes this element and its children into `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

fn escape_into(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

// ============================================================================
// Fragment
// ============================================================================

/// What a fragment depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    CoilLayer,
    Swirl,
    Eye,
    Mouth,
    Blush,
    Arm,
    Leg,
}

impl FragmentKind {
    /// The CSS class every fragment of this kind carries.
    pub fn class(&self) -> &'static str {
        match self {
            Self::CoilLayer => "coil-layer",
            Self::Swirl => "swirl-top",
            Self::Eye => "eye",
            Self::Mouth => "mouth",
            Self::Blush => "blush",
            Self::Arm => "arm",
            Self::Leg => "leg",
        }
    }
}

/// One renderer's output: a group of elements tagged with its kind.
///
/// The composer only orders fragments; it never looks inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    kind: FragmentKind,
    class: String,
    elements: Vec<Element>,
}

impl Fragment {
    pub fn new(kind: FragmentKind) -> Self {
        Self {
            kind,
            class: kind.class().to_string(),
            elements: Vec::new(),
        }
    }

    /// Adds a qualifier class such as `coil-layer-2` or `arm-left`.
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        self.class.push(' ');
        self.class.push_str(class.as_ref());
        self
    }

    pub fn push(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Wraps the fragment in a `<g>` element.
    pub fn to_element(&self) -> Element {
        Element::new("g")
            .attr("class", &self.class)
            .children(self.elements.iter().cloned())
    }
}

// ============================================================================
// Document
// ============================================================================

/// Pixel size of the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// A complete, self-contained figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    viewport: Viewport,
    defs: Vec<Element>,
    fragments: Vec<Fragment>,
}

impl Document {
    /// Creates a document. `fragments` are drawn in the given order.
    pub fn new(viewport: Viewport, defs: Vec<Element>, fragments: Vec<Fragment>) -> Self {
        Self {
            viewport,
            defs,
            fragments,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Shared resource definitions (texture pattern and gradient).
    pub fn defs(&self) -> &[Element] {
        &self.defs
    }

    /// All fragments in draw order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragments of one kind, in draw order.
    pub fn fragments_of(&self, kind: FragmentKind) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(move |f| f.kind == kind)
    }

    /// Number of fragments of one kind.
    pub fn count(&self, kind: FragmentKind) -> usize {
        self.fragments_of(kind).count()
    }

    /// Builds the root `<svg>` element.
    pub fn to_element(&self) -> Element {
        let Viewport { width, height } = self.viewport;
        Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("viewBox", format!("0 0 {} {}", width, height))
            .attr("width", width)
            .attr("height", height)
            .child(Element::new("defs").children(self.defs.iter().cloned()))
            .child(
                Element::new("rect")
                    .attr("width", "100%")
                    .attr("height", "100%")
                    .attr("fill", "none"),
            )
            .children(self.fragments.iter().map(Fragment::to_element))
    }

    /// Serializes the document as SVG markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.to_element().write_to(&mut out);
        out
    }

    /// Serializes the document as a standalone `.svg` file with an XML declaration.
    pub fn to_svg_file(&self) -> String {
        format!("{}\n{}", XML_DECLARATION, self.to_svg())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}
