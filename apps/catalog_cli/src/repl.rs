//! Line-oriented front-end over [`CatalogManager`].

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use catalog_core::{
    view::{category_label, summary_line},
    CatalogManager, EditorState, NotificationCenter,
};
use shared::{
    domain::{Product, ProductDraft, ProductId, Severity},
    error::Field,
    validation::ProductForm,
};

/// Prompt order of the add/edit form.
const FORM_FIELDS: [Field; 5] = [
    Field::Title,
    Field::Price,
    Field::Category,
    Field::Image,
    Field::Description,
];

const HELP: &str = "\
commands:
  list                    show the filtered catalog
  search <text>           filter by title, description or category (empty clears)
  category <name>|all     filter by exact category
  categories              list known categories
  clear                   reset search and category filters
  show <id>               print one product
  add                     add a product
  edit <id>               edit a product
  delete <id>             delete a product (asks first)
  dismiss                 hide the current notification
  help                    this text
  quit                    exit
in forms: empty input keeps the current value, '-' clears it, '!cancel' aborts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Category(Option<String>),
    Categories,
    Clear,
    Show(ProductId),
    Add,
    Edit(ProductId),
    Delete(ProductId),
    Dismiss,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "search" | "find" => Command::Search(rest.to_string()),
        "category" | "cat" => match rest {
            "" | "all" => Command::Category(None),
            name => Command::Category(Some(name.to_string())),
        },
        "categories" => Command::Categories,
        "clear" => Command::Clear,
        "show" => Command::Show(parse_id(rest)?),
        "add" | "new" => Command::Add,
        "edit" => Command::Edit(parse_id(rest)?),
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "dismiss" => Command::Dismiss,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "" => bail!("empty command"),
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(command)
}

fn parse_id(raw: &str) -> Result<ProductId> {
    if raw.is_empty() {
        bail!("missing product id");
    }
    let id = raw
        .parse::<i64>()
        .with_context(|| format!("invalid product id '{raw}'"))?;
    Ok(ProductId(id))
}

pub fn render_product(product: &Product) -> String {
    format!(
        "#{:<4} {}  ${:.2}  [{}]  {:.1}/5 ({} reviews)",
        product.id.0,
        product.title,
        product.price,
        category_label(&product.category),
        product.rating.rate,
        product.rating.count
    )
}

fn render_details(product: &Product) -> String {
    format!(
        "{}\n  {}\n  image: {}",
        render_product(product),
        product.description,
        product.image.as_deref().unwrap_or("-")
    )
}

pub struct Repl<R, W> {
    manager: CatalogManager<NotificationCenter>,
    input: R,
    output: W,
    shown_generation: u64,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(manager: CatalogManager<NotificationCenter>, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
            shown_generation: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Loading products...")?;
        self.manager.load().await;
        self.flush_notification()?;
        self.print_list()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = read_line(&mut self.input)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
            self.flush_notification()?;
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::List => self.print_list()?,
            Command::Search(term) => {
                self.manager.set_search(term);
                self.print_list()?;
            }
            Command::Category(category) => {
                self.manager.select_category(category);
                self.print_list()?;
            }
            Command::Categories => {
                for category in self.manager.state().categories() {
                    writeln!(self.output, "  {} ({category})", category_label(category))?;
                }
            }
            Command::Clear => {
                self.manager.clear_filters();
                self.print_list()?;
            }
            Command::Show(id) => match self.manager.state().get(id) {
                Some(product) => writeln!(self.output, "{}", render_details(product))?,
                None => writeln!(self.output, "no product with id {id}")?,
            },
            Command::Add => {
                self.manager.open_add();
                self.edit_loop(ProductForm::default()).await?;
            }
            Command::Edit(id) => {
                let form = match self.manager.open_edit(id) {
                    Ok(product) => ProductForm::from_product(product),
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        return Ok(());
                    }
                };
                self.edit_loop(form).await?;
            }
            Command::Delete(id) => {
                let Self {
                    manager,
                    input,
                    output,
                    ..
                } = self;
                let mut confirm =
                    |question: &str| ask_yes_no(&mut *input, &mut *output, question);
                let result = manager.delete(id, &mut confirm).await;
                match result {
                    Ok(Some(_)) => writeln!(output, "deleted #{id}")?,
                    Ok(None) => writeln!(output, "kept #{id}")?,
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            Command::Dismiss => self.manager.notifier_mut().dismiss(),
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Keeps the form open until a save succeeds or the user gives up.
    async fn edit_loop(&mut self, form: ProductForm) -> Result<()> {
        let mut form = form;
        loop {
            let Some(draft) = self.prompt_form(&mut form)? else {
                self.manager.close_editor();
                writeln!(self.output, "cancelled")?;
                return Ok(());
            };

            match self.manager.save(draft).await {
                Ok(outcome) => {
                    writeln!(self.output, "{}", render_product(&outcome.applied))?;
                    return Ok(());
                }
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    self.flush_notification()?;
                    if self.manager.editor() == EditorState::Closed
                        || !ask_yes_no(&mut self.input, &mut self.output, "Retry?")
                    {
                        self.manager.close_editor();
                        return Ok(());
                    }
                }
            }
        }
    }

    fn prompt_form(&mut self, form: &mut ProductForm) -> Result<Option<ProductDraft>> {
        let mut pending = FORM_FIELDS.to_vec();
        loop {
            for field in &pending {
                let marker = if *field == Field::Image { "" } else { " *" };
                write!(
                    self.output,
                    "{}{marker} [{}]: ",
                    field.label(),
                    form.field(*field)
                )?;
                self.output.flush()?;

                let Some(line) = read_line(&mut self.input)? else {
                    return Ok(None);
                };
                match line.trim() {
                    "!cancel" => return Ok(None),
                    "" => {}
                    "-" => form.set(*field, String::new()),
                    value => form.set(*field, value),
                }
            }

            match form.validate() {
                Ok(draft) => return Ok(Some(draft)),
                Err(errors) => {
                    for err in errors.iter() {
                        writeln!(self.output, "  {}", err.message)?;
                    }
                    pending = errors.iter().map(|err| err.field).collect();
                }
            }
        }
    }

    fn print_list(&mut self) -> Result<()> {
        let state = self.manager.state();
        writeln!(self.output, "{}", summary_line(state, self.manager.status()))?;
        if state.filtered().is_empty() {
            writeln!(self.output, "No products found")?;
            if !state.criteria().is_empty() {
                writeln!(self.output, "Try adjusting your search or filters ('clear')")?;
            }
            return Ok(());
        }
        for product in state.filtered() {
            writeln!(self.output, "{}", render_product(product))?;
        }
        Ok(())
    }

    fn flush_notification(&mut self) -> Result<()> {
        let center = self.manager.notifier();
        if center.generation() == self.shown_generation {
            return Ok(());
        }
        self.shown_generation = center.generation();
        if let Some(notification) = center.current() {
            let tag = match notification.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
                Severity::Info => "info",
            };
            writeln!(self.output, "[{tag}] {}", notification.message)?;
        }
        Ok(())
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask_yes_no(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> bool {
    if write!(output, "{question} [y/N] ")
        .and_then(|()| output.flush())
        .is_err()
    {
        return false;
    }
    match read_line(input) {
        Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/repl_tests.rs"]
mod tests;
