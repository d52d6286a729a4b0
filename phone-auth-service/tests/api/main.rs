mod bind_email;
