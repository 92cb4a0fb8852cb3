//! # Robot Controller Constants
//!
//! Fixed identifiers defined by default robot controller systems and by Robot
//! Web Services (RWS). This is configuration data for callers of the search
//! layer: it carries no behavior.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`controller_states`] | Controller/panel/RAPID state names |
//! | [`general`] | Default user, application, port and mechanical units |
//! | [`io_signals`] | Named I/O signals and digital levels |
//! | [`rapid`] | RAPID literals, task names, data types |
//! | [`rws`] | XML attribute predicates, identifiers, services, queries, resources |
//!
//! The named predicates are also available as a registry, [`XML_ATTRIBUTES`],
//! with lookup by identifier through [`xml_attribute`].

use crate::attributes::XmlAttribute;

/// Controller states related constants.
pub mod controller_states {
    pub const CONTROLLER_MOTOR_ON: &str = "motoron";
    pub const CONTROLLER_MOTOR_OFF: &str = "motoroff";
    pub const PANEL_OPERATION_MODE_AUTO: &str = "AUTO";
    pub const RAPID_EXECUTION_RUNNING: &str = "running";
}

pub mod general {
    /// Default name of an application using RWS.
    pub const EXTERNAL_APPLICATION: &str = "ExternalApplication";
    /// Default location of an application using RWS.
    pub const EXTERNAL_LOCATION: &str = "ExternalLocation";
    pub const DEFAULT_PORT_NUMBER: u16 = 443;
    /// Password of unconfigured robot controller systems.
    pub const DEFAULT_PASSWORD: &str = "robotics";
    /// Username of unconfigured robot controller systems.
    pub const DEFAULT_USERNAME: &str = "Default User";
    pub const LOCAL: &str = "local";
    pub const REMOTE: &str = "remote";
    pub const MECHANICAL_UNIT_ROB_1: &str = "ROB_1";
    pub const MECHANICAL_UNIT_ROB_2: &str = "ROB_2";
    pub const MECHANICAL_UNIT_ROB_3: &str = "ROB_3";
    pub const MECHANICAL_UNIT_ROB_4: &str = "ROB_4";
    pub const MECHANICAL_UNIT_ROB_L: &str = "ROB_L";
    pub const MECHANICAL_UNIT_ROB_R: &str = "ROB_R";
}

/// I/O signal names. The `HAND_*` signals require the Smart Gripper product.
pub mod io_signals {
    pub const HAND_ACTUAL_POSITION_L: &str = "hand_ActualPosition_L";
    pub const HAND_ACTUAL_POSITION_R: &str = "hand_ActualPosition_R";
    pub const HAND_ACTUAL_SPEED_L: &str = "hand_ActualSpeed_L";
    pub const HAND_ACTUAL_SPEED_R: &str = "hand_ActualSpeed_R";
    pub const HAND_STATUS_CALIBRATED_L: &str = "hand_StatusCalibrated_L";
    pub const HAND_STATUS_CALIBRATED_R: &str = "hand_StatusCalibrated_R";
    pub const HIGH: &str = "1";
    pub const LOW: &str = "0";
}

pub mod rapid {
    pub const RAPID_FALSE: &str = "FALSE";
    pub const RAPID_TRUE: &str = "TRUE";
    pub const TASK_ROB_1: &str = "T_ROB1";
    pub const TASK_ROB_2: &str = "T_ROB2";
    pub const TASK_ROB_3: &str = "T_ROB3";
    pub const TASK_ROB_4: &str = "T_ROB4";
    /// IRB14000 (YuMi) left arm motion task.
    pub const TASK_ROB_L: &str = "T_ROB_L";
    /// IRB14000 (YuMi) right arm motion task.
    pub const TASK_ROB_R: &str = "T_ROB_R";
    pub const TYPE_BOOL: &str = "bool";
    pub const TYPE_DNUM: &str = "dnum";
    pub const TYPE_NUM: &str = "num";
    pub const TYPE_STRING: &str = "string";
}

/// Robot Web Services constants.
pub mod rws {
    /// Attribute predicates found in RWS responses. All use the `class` name.
    pub mod xml_attributes {
        use crate::attributes::XmlAttribute;

        const fn class(value: &'static str) -> XmlAttribute {
            XmlAttribute::from_static(super::identifiers::CLASS, value)
        }

        pub const CLASS_CFG_IA_T_LI: XmlAttribute = class("cfg-ia-t-li");
        pub const CLASS_CTRLEXECSTATE: XmlAttribute = class("ctrlexecstate");
        pub const CLASS_CTRLSTATE: XmlAttribute = class("ctrlstate");
        pub const CLASS_DATTYP: XmlAttribute = class("dattyp");
        pub const CLASS_IOS_SIGNAL: XmlAttribute = class("ios-signal");
        pub const CLASS_LVALUE: XmlAttribute = class("lvalue");
        pub const CLASS_MOTIONTASK: XmlAttribute = class("motiontask");
        pub const CLASS_NAME: XmlAttribute = class("name");
        pub const CLASS_OPMODE: XmlAttribute = class("opmode");
        pub const CLASS_RAP_MODULE_INFO_LI: XmlAttribute = class("rap-module-info-li");
        pub const CLASS_RAP_TASK_LI: XmlAttribute = class("rap-task-li");
        pub const CLASS_RW_VERSION_NAME: XmlAttribute = class("rwversionname");
        pub const CLASS_STATE: XmlAttribute = class("state");
        pub const CLASS_SYS_SYSTEM_LI: XmlAttribute = class("sys-system-li");
        pub const CLASS_TYPE: XmlAttribute = class("type");
        pub const CLASS_VALUE: XmlAttribute = class("value");
    }

    /// Attribute names and values used in RWS messages.
    pub mod identifiers {
        pub const CLASS: &str = "class";
        pub const CFG_IA_T_LI: &str = "cfg-ia-t-li";
        pub const CTRLEXECSTATE: &str = "ctrlexecstate";
        pub const CTRLSTATE: &str = "ctrlstate";
        pub const DATTYP: &str = "dattyp";
        pub const HOME_DIRECTORY: &str = "$home";
        pub const IOS_SIGNAL: &str = "ios-signal";
        pub const MOTIONTASK: &str = "motiontask";
        pub const NAME: &str = "name";
        pub const LVALUE: &str = "lvalue";
        pub const OPMODE: &str = "opmode";
        pub const PRESENT_OPTIONS: &str = "present_options";
        pub const RAP_MODULE_INFO_LI: &str = "rap-module-info-li";
        pub const RAP_TASK_LI: &str = "rap-task-li";
        pub const RW_VERSION_NAME: &str = "rwversionname";
        pub const STATE: &str = "state";
        /// Controller topic in the system configurations.
        pub const SYS: &str = "sys";
        pub const SYS_SYSTEM_LI: &str = "sys-system-li";
        pub const TYPE: &str = "type";
        pub const VALUE: &str = "value";
    }

    pub mod services {
        pub const CTRL: &str = "/ctrl";
        pub const FILESERVICE: &str = "/fileservice";
        pub const RW: &str = "/rw";
        pub const SUBSCRIPTION: &str = "/subscription";
        pub const USERS: &str = "/users";
    }

    pub mod queries {
        pub const ACTION_RELEASE: &str = "release";
        pub const ACTION_REQUEST: &str = "request";
        pub const ACTION_RESETPP: &str = "resetpp";
        pub const ACTION_SET: &str = "set-value";
        pub const ACTION_SETCTRLSTATE: &str = "action=setctrlstate";
        pub const ACTION_SET_LOCALE: &str = "action=set-locale";
        pub const ACTION_START: &str = "start";
        pub const ACTION_STOP: &str = "stop";
        pub const TASK: &str = "task=";
    }

    /// Resource paths. `RW_*` paths live under [`services::RW`](super::services::RW).
    pub mod resources {
        // Must stay in sync with services::RW.
        macro_rules! rw {
            ($path:literal) => {
                concat!("/rw", $path)
            };
        }

        pub const INSTANCES: &str = "/instances";
        pub const JOINTTARGET: &str = "/jointtarget";
        pub const LOGOUT: &str = "/logout";
        pub const ROBTARGET: &str = "/robtarget";
        pub const LEADTHROUGH: &str = "/lead-through";
        pub const MODULES: &str = "/modules";
        pub const RW_CFG: &str = rw!("/cfg");
        pub const RW_IOSYSTEM_SIGNALS: &str = rw!("/iosystem/signals");
        pub const RW_MASTERSHIP: &str = rw!("/mastership/edit");
        pub const RW_MOTIONSYSTEM_MECHUNITS: &str = rw!("/motionsystem/mechunits");
        pub const RW_PANEL_CTRLSTATE: &str = rw!("/panel/ctrl-state");
        pub const RW_PANEL_OPMODE: &str = rw!("/panel/opmode");
        pub const RW_RAPID_EXECUTION: &str = rw!("/rapid/execution");
        pub const RW_RAPID_MODULES: &str = rw!("/rapid/modules");
        pub const RW_RAPID_SYMBOL_DATA_RAPID: &str = rw!("/rapid/symbol/RAPID");
        pub const RW_RAPID_SYMBOL_PROPERTIES_RAPID: &str = rw!("/rapid/symbol/RAPID");
        pub const RW_RAPID_TASKS: &str = rw!("/rapid/tasks");
        pub const RW_SYSTEM: &str = rw!("/system");
    }
}

/// Registry of every named RWS attribute predicate.
pub const XML_ATTRIBUTES: &[XmlAttribute] = {
    use rws::xml_attributes::*;
    &[
        CLASS_CFG_IA_T_LI,
        CLASS_CTRLEXECSTATE,
        CLASS_CTRLSTATE,
        CLASS_DATTYP,
        CLASS_IOS_SIGNAL,
        CLASS_LVALUE,
        CLASS_MOTIONTASK,
        CLASS_NAME,
        CLASS_OPMODE,
        CLASS_RAP_MODULE_INFO_LI,
        CLASS_RAP_TASK_LI,
        CLASS_RW_VERSION_NAME,
        CLASS_STATE,
        CLASS_SYS_SYSTEM_LI,
        CLASS_TYPE,
        CLASS_VALUE,
    ]
};

/// Looks up a named predicate by its identifier (its value), e.g. `"ctrlstate"`.
pub fn xml_attribute(identifier: &str) -> Option<&'static XmlAttribute> {
    XML_ATTRIBUTES.iter().find(|attr| attr.value() == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resources_are_rooted_at_rw_service() {
        for path in [
            rws::resources::RW_CFG,
            rws::resources::RW_IOSYSTEM_SIGNALS,
            rws::resources::RW_PANEL_CTRLSTATE,
            rws::resources::RW_SYSTEM,
        ] {
            assert!(path.starts_with(rws::services::RW), "{path}");
        }
        assert_eq!(rws::resources::RW_PANEL_OPMODE, "/rw/panel/opmode");
    }

    #[test]
    fn every_registered_predicate_uses_class() {
        assert!(XML_ATTRIBUTES
            .iter()
            .all(|attr| attr.name() == rws::identifiers::CLASS));
    }

    #[test]
    fn registry_identifiers_are_unique() {
        let values: HashSet<_> = XML_ATTRIBUTES.iter().map(|a| a.value()).collect();
        assert_eq!(values.len(), XML_ATTRIBUTES.len());
    }

    #[test]
    fn lookup_by_identifier() {
        assert_eq!(
            xml_attribute(rws::identifiers::CTRLSTATE),
            Some(&rws::xml_attributes::CLASS_CTRLSTATE)
        );
        assert_eq!(xml_attribute("no-such-class"), None);
    }

    #[test]
    fn predicates_agree_with_identifiers() {
        use rws::{identifiers as id, xml_attributes as attr};
        assert_eq!(attr::CLASS_IOS_SIGNAL.value(), id::IOS_SIGNAL);
        assert_eq!(attr::CLASS_LVALUE.value(), id::LVALUE);
        assert_eq!(attr::CLASS_RW_VERSION_NAME.value(), id::RW_VERSION_NAME);
    }
}
