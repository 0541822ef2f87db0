pub mod commands {
    pub mod register_labour;
}

pub mod entries {
    pub mod labour_entry;
}

pub mod shell;
