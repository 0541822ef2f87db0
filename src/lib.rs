pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod document_store;
        pub mod identity;
    }
}

pub mod modules {
    pub mod labour_entries {
        pub mod core {
            pub mod categories;
            pub mod entry;
            pub mod errors;
            pub mod status;
        }
        pub mod use_cases {
            pub mod register_labour {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod mark_attendance {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_labour_entries {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_labour {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_categories {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod document_mapper;
                pub mod entry_store;
            }
        }
    }
}

pub mod shell;
