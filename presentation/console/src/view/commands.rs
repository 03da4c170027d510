use business::domain::product::errors::ValidationError;
use business::domain::product::form::ProductForm;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("expected `field=value`, got `{0}`")]
    MalformedChange(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("add expects barcode;description;price;quantity[;category]")]
    MalformedAdd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Barcode,
    Description,
    Price,
    Quantity,
    Category,
}

impl std::str::FromStr for Field {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "barcode" => Ok(Field::Barcode),
            "description" => Ok(Field::Description),
            "price" => Ok(Field::Price),
            "quantity" => Ok(Field::Quantity),
            "category" => Ok(Field::Category),
            other => Err(CommandError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: Field,
    pub value: String,
}

impl FieldChange {
    /// Writes the change into `form`. Locked barcodes refuse the write.
    pub fn apply(&self, form: &mut ProductForm) -> Result<(), ValidationError> {
        let value = self.value.clone();
        match self.field {
            Field::Barcode => form.set_barcode(value)?,
            Field::Description => form.description = value,
            Field::Price => form.price = value,
            Field::Quantity => form.quantity = value,
            Field::Category => form.category = value,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Category(Option<String>),
    Categories,
    Refresh,
    Show(ProductId),
    Add(ProductForm),
    Edit {
        id: ProductId,
        changes: Vec<FieldChange>,
    },
    Delete(ProductId),
    Help,
    Quit,
}

impl Command {
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" => Command::Search(rest.to_string()),
            "category" => match rest {
                "" | "any" | "all" => Command::Category(None),
                name => Command::Category(Some(name.to_string())),
            },
            "categories" => Command::Categories,
            "refresh" => Command::Refresh,
            "show" => Command::Show(required_id(rest)?),
            "add" => Command::Add(parse_add(rest)?),
            "edit" => parse_edit(rest)?,
            "delete" | "rm" => Command::Delete(required_id(rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required_id(rest: &str) -> Result<ProductId, CommandError> {
    rest.split_whitespace()
        .next()
        .map(ProductId::from)
        .ok_or(CommandError::Missing("product id"))
}

fn parse_add(rest: &str) -> Result<ProductForm, CommandError> {
    let parts: Vec<&str> = rest.split(';').map(str::trim).collect();
    if !(4..=5).contains(&parts.len()) {
        return Err(CommandError::MalformedAdd);
    }

    let mut form = ProductForm::blank();
    // A blank form never has its barcode locked.
    let _ = form.set_barcode(parts[0]);
    form.description = parts[1].to_string();
    form.price = parts[2].to_string();
    form.quantity = parts[3].to_string();
    form.category = parts.get(4).copied().unwrap_or_default().to_string();
    Ok(form)
}

fn parse_edit(rest: &str) -> Result<Command, CommandError> {
    let (id, assignments) = match rest.split_once(char::is_whitespace) {
        Some((id, assignments)) => (id, assignments.trim()),
        None if !rest.is_empty() => (rest, ""),
        None => return Err(CommandError::Missing("product id")),
    };
    if assignments.is_empty() {
        return Err(CommandError::Missing("field=value changes"));
    }

    let changes = assignments
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(|assignment| {
            let (field, value) = assignment
                .split_once('=')
                .ok_or_else(|| CommandError::MalformedChange(assignment.to_string()))?;
            Ok(FieldChange {
                field: field.parse()?,
                value: value.trim().to_string(),
            })
        })
        .collect::<Result<Vec<_>, CommandError>>()?;

    Ok(Command::Edit {
        id: ProductId::from(id),
        changes,
    })
}
