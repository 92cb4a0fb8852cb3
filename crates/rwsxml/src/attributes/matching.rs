//! The attribute presence test.

use super::XmlAttribute;
use crate::tree::XmlNode;

/// Checks whether `node` carries `attribute` (exact, case-sensitive match on
/// both name and value).
///
/// - Wildcard predicate: `true`, whatever `node` is, even `None`.
/// - Absent node or node without attributes: `false`.
/// - Otherwise: `true` on the first attribute in stored order whose name and
///   value both match.
pub fn node_has_attribute<'a, N: XmlNode<'a>>(node: Option<N>, attribute: &XmlAttribute) -> bool {
    if attribute.is_wildcard() {
        return true;
    }

    let Some(node) = node else {
        return false;
    };

    node.attributes()
        .any(|(name, value)| name == attribute.name() && value == attribute.value())
}
