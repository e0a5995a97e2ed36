
#[cfg(test)]
mod auth_tests;


#[cfg(test)]
mod department_tests;

#[cfg(test)]
mod employee_tests;

#[cfg(test)]
mod leave_tests;
