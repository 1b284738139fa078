mod introspection;
