//! # Rendering
//!
//! Turns search results into terminal output. Two modes:
//!
//! - **Text**: one line per item, styled with `console` when the terminal
//!   supports color.
//! - **JSON**: pretty-printed `serde_json` of the same data, for scripts.
//!
//! Everything here returns strings; printing happens in `commands.rs`.

use console::style;
use rwsxml::config::RwsConfig;
use rwsxml::error::Result;
use rwsxml::model::Attribute;
use rwsxml::{NodeRef, XmlAttribute};
use serde::Serialize;

/// A matched element, detached from its document.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    /// 1-based position in the match list.
    pub index: usize,
    pub tag: String,
    pub attributes: Vec<Attribute>,
}

pub fn node_summaries(nodes: &[NodeRef<'_>]) -> Vec<NodeSummary> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| NodeSummary {
            index: i + 1,
            tag: node.name().to_string(),
            attributes: node.attributes().to_vec(),
        })
        .collect()
}

pub fn nodes_text(nodes: &[NodeSummary], color: bool) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&format!(
            "{} <{}",
            style(format!("{:>3}.", node.index)).dim().force_styling(color),
            style(&node.tag).cyan().force_styling(color)
        ));
        for attr in &node.attributes {
            out.push_str(&format!(
                " {}=\"{}\"",
                style(&attr.name).yellow().force_styling(color),
                attr.value
            ));
        }
        out.push_str(">\n");
    }
    out
}

pub fn attributes_text(attributes: &[XmlAttribute], color: bool) -> String {
    let width = attributes
        .iter()
        .map(|attr| attr.value().len())
        .max()
        .unwrap_or(0);
    attributes
        .iter()
        .map(|attr| {
            format!(
                "{}  {}\n",
                style(format!("{:<width$}", attr.value()))
                    .bold()
                    .force_styling(color),
                attr
            )
        })
        .collect()
}

pub fn config_text(config: &RwsConfig) -> String {
    format!(
        "attribute_name = {:?}\nlog_filter = {:?}\njson = {}\n",
        config.attribute_name, config.log_filter, config.json
    )
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
