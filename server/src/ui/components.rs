use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Button,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Number,
    Password,
}

/// Declarative UI node handed to the host renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Panel {
        children: Vec<Component>,
    },
    Heading {
        value: String,
    },
    Text {
        value: String,
    },
    Divider,
    Row {
        label: String,
        value: Box<Component>,
    },
    Button {
        value: String,
        name: String,
        variant: ButtonVariant,
        #[serde(rename = "buttonType")]
        button_type: ButtonType,
    },
    Input {
        name: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(rename = "inputType")]
        input_type: InputType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Form {
        name: String,
        children: Vec<Component>,
    },
}

impl Component {
    /// Collects this node and every descendant, depth first.
    pub fn walk(&self) -> Vec<&Component> {
        let mut nodes = vec![self];
        match self {
            Component::Panel { children } | Component::Form { children, .. } => {
                for child in children {
                    nodes.extend(child.walk());
                }
            }
            Component::Row { value, .. } => nodes.extend(value.walk()),
            _ => {}
        }
        nodes
    }

    /// Names of every button in the tree
    pub fn button_names(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Component::Button { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text content of every heading and text node
    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                Component::Heading { value } | Component::Text { value } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub fn panel(children: Vec<Component>) -> Component {
    Component::Panel { children }
}

pub fn heading(value: impl Into<String>) -> Component {
    Component::Heading {
        value: value.into(),
    }
}

pub fn text(value: impl Into<String>) -> Component {
    Component::Text {
        value: value.into(),
    }
}

pub fn divider() -> Component {
    Component::Divider
}

pub fn row(label: impl Into<String>, value: Component) -> Component {
    Component::Row {
        label: label.into(),
        value: Box::new(value),
    }
}

pub fn button(value: impl Into<String>, name: impl Into<String>) -> Component {
    Component::Button {
        value: value.into(),
        name: name.into(),
        variant: ButtonVariant::Primary,
        button_type: ButtonType::Button,
    }
}

pub fn secondary_button(value: impl Into<String>, name: impl Into<String>) -> Component {
    Component::Button {
        value: value.into(),
        name: name.into(),
        variant: ButtonVariant::Secondary,
        button_type: ButtonType::Button,
    }
}

pub fn submit_button(value: impl Into<String>, name: impl Into<String>) -> Component {
    Component::Button {
        value: value.into(),
        name: name.into(),
        variant: ButtonVariant::Primary,
        button_type: ButtonType::Submit,
    }
}

pub fn input(
    name: impl Into<String>,
    label: impl Into<String>,
    placeholder: Option<&str>,
    input_type: InputType,
    value: Option<String>,
) -> Component {
    Component::Input {
        name: name.into(),
        label: label.into(),
        placeholder: placeholder.map(str::to_string),
        input_type,
        value,
    }
}

pub fn form(name: impl Into<String>, children: Vec<Component>) -> Component {
    Component::Form {
        name: name.into(),
        children,
    }
}
