pub mod shared {
    pub mod core {
        pub mod coerce;
        pub mod dates;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod trip_progress {
        pub mod core {
            pub mod aggregate;
            pub mod entry;
        }
        pub mod use_cases {
            pub mod register_trip_progress {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod trip_progress_report {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod report;
            }
        }
    }
    pub mod expenses {
        pub mod core {
            pub mod expense;
        }
        pub mod use_cases {
            pub mod register_expense {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod expense_report {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod report;
            }
        }
    }
    pub mod route {
        pub mod core {
            pub mod location;
        }
        pub mod use_cases {
            pub mod add_location {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod route_map {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod report;
            }
        }
    }
}

pub mod shell;
